//! Panel properties: defaults, limits and named pick/place frames.
//!
//! Only property values are read from a document. Their limits are fixed
//! here and cannot be overridden.

use crate::error::{GraspError, Result};
use crate::selection::TargetSelection;
use crate::types::BoxDimensions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Inclusive bounds for a numeric property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRange {
    pub min: f64,
    pub max: f64,
}

impl PropertyRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, property: &str, values: &[f64]) -> Result<()> {
        match values.iter().find(|v| !self.contains(**v)) {
            Some(&value) => Err(GraspError::out_of_range(property, value, self.min, self.max)),
            None => Ok(()),
        }
    }
}

/// A three-component property value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorProperty {
    pub value: [f64; 3],
}

impl VectorProperty {
    pub const fn new(value: [f64; 3]) -> Self {
        Self { value }
    }
}

/// Box pose and size for the "update grasp target" task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraspTarget {
    pub position: [f64; 3],
    /// Roll, pitch, yaw in degrees.
    pub orientation: [f64; 3],
    pub dimensions: BoxDimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraspTargetProperties {
    pub position: VectorProperty,
    pub orientation: VectorProperty,
    pub dimensions: VectorProperty,
}

impl Default for GraspTargetProperties {
    fn default() -> Self {
        Self {
            position: VectorProperty::new([0.0; 3]),
            orientation: VectorProperty::new([0.0; 3]),
            dimensions: VectorProperty::new([0.1, 0.2, 0.3]),
        }
    }
}

impl GraspTargetProperties {
    pub const POSITION_RANGE: PropertyRange = PropertyRange::new(-1.0, 1.0);
    pub const ORIENTATION_RANGE: PropertyRange = PropertyRange::new(-360.0, 360.0);
    pub const DIMENSIONS_RANGE: PropertyRange = PropertyRange::new(0.001, 1.0);

    pub fn validate(&self) -> Result<()> {
        BoxDimensions::from(self.dimensions.value).validate()?;
        Self::POSITION_RANGE.check("Position", &self.position.value)?;
        Self::ORIENTATION_RANGE.check("Orientation", &self.orientation.value)?;
        Self::DIMENSIONS_RANGE.check("Dimensions", &self.dimensions.value)
    }

    pub fn to_target(&self) -> Result<GraspTarget> {
        self.validate()?;
        Ok(GraspTarget {
            position: self.position.value,
            orientation: self.orientation.value,
            dimensions: self.dimensions.value.into(),
        })
    }
}

/// A fixed pick or place location the task tree moves between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFrame {
    pub name: String,
    pub position: [f64; 3],
    #[serde(default = "default_single_step")]
    pub single_step: f64,
}

fn default_single_step() -> f64 {
    0.01
}

impl NamedFrame {
    pub fn new(name: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            position,
            single_step: default_single_step(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(GraspError::invalid_frame(&self.name, "empty name"));
        }
        if !self.position.iter().all(|p| p.is_finite()) {
            return Err(GraspError::invalid_frame(
                &self.name,
                format!("non-finite position {:?}", self.position),
            ));
        }
        if !(self.single_step.is_finite() && self.single_step > 0.0) {
            return Err(GraspError::invalid_frame(
                &self.name,
                format!("step {} must be positive", self.single_step),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Property holding the selected rigid-body name.
    pub target_property: String,
    /// Box size assumed when targeting a named frame.
    pub default_target_dimensions: [f64; 3],
    pub frames: Vec<NamedFrame>,
    pub grasp_target: GraspTargetProperties,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            target_property: TargetSelection::DEFAULT_PROPERTY.to_string(),
            // Robot toy. A water bottle is [0.07, 0.07, 0.22].
            default_target_dimensions: [0.06, 0.02, 0.09],
            frames: vec![
                NamedFrame::new("Frame 1", [0.8, 0.36, 0.30]),
                NamedFrame::new("Frame 2", [0.8, -0.36, 0.30]),
            ],
            grasp_target: GraspTargetProperties::default(),
        }
    }
}

impl PanelConfig {
    /// Parse a JSON document; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.grasp_target.validate()?;
        self.default_dimensions().validate()?;

        let mut seen = HashSet::new();
        for frame in &self.frames {
            frame.validate()?;
            if !seen.insert(frame.name.as_str()) {
                return Err(GraspError::invalid_frame(&frame.name, "duplicate name"));
            }
        }
        Ok(())
    }

    pub fn frame(&self, name: &str) -> Result<&NamedFrame> {
        self.frames
            .iter()
            .find(|frame| frame.name == name)
            .ok_or_else(|| GraspError::UnknownFrame(name.to_string()))
    }

    pub fn default_dimensions(&self) -> BoxDimensions {
        self.default_target_dimensions.into()
    }

    /// An empty selection bound to the configured property name.
    pub fn target_selection(&self) -> TargetSelection {
        TargetSelection::for_property(&self.target_property)
    }
}
