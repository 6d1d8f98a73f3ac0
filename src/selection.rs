use tracing::debug;

/// Which tracked rigid body the panel targets.
///
/// Mirrors an enum property: a list of names plus the selected index. The
/// list starts as a single empty name, meaning nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    property: String,
    names: Vec<String>,
    index: usize,
}

impl Default for TargetSelection {
    fn default() -> Self {
        Self::for_property(Self::DEFAULT_PROPERTY)
    }
}

impl TargetSelection {
    pub const DEFAULT_PROPERTY: &'static str = "Target rigid body";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_property(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            names: vec![String::new()],
            index: 0,
        }
    }

    /// Name of the enum property this selection backs.
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Name of the selected body, empty when nothing is selected.
    pub fn selected(&self) -> &str {
        self.names.get(self.index).map_or("", String::as_str)
    }

    /// Select by name. Returns false and keeps the selection if unknown.
    pub fn select(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Replace the body list, keeping the previous selection when it is
    /// still tracked and falling back to the first entry otherwise.
    pub fn update_body_list<I, S>(&mut self, bodies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let old_name = self.selected().to_string();
        debug!(
            property = %self.property,
            old_selection = %old_name,
            "rigid body list changed"
        );

        self.index = 0;
        self.names = bodies.into_iter().map(Into::into).collect();
        if self.names.is_empty() {
            self.names.push(String::new());
        }
        self.select(&old_name);
    }
}
