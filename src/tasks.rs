//! The static pick-and-place task tree.
//!
//! Only the structure is built here. Running it (and deciding what each
//! [`TaskAction`] does) belongs to the host's task runner.

/// Planner or gripper call bound to a callback task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Aim the planner at a box on the named frame.
    TargetFrame(String),
    AddGraspFrames,
    PlanPreGrasp,
    PlanGrasp,
    CommitManipPlan,
    WaitForExecute,
    CloseGripper,
    OpenGripper,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskNode {
    Folder { name: String, children: Vec<TaskNode> },
    Callback { name: String, action: TaskAction },
    Delay { name: String, seconds: f64 },
}

impl TaskNode {
    pub fn folder(name: impl Into<String>, children: Vec<TaskNode>) -> Self {
        Self::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn callback(name: impl Into<String>, action: TaskAction) -> Self {
        Self::Callback {
            name: name.into(),
            action,
        }
    }

    pub fn delay(name: impl Into<String>, seconds: f64) -> Self {
        Self::Delay {
            name: name.into(),
            seconds,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::Callback { name, .. } | Self::Delay { name, .. } => {
                name
            }
        }
    }

    /// Callback and delay tasks in run order, each with the names of the
    /// folders above it.
    pub fn leaves(&self) -> Vec<(Vec<&str>, &TaskNode)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut out);
        out
    }

    fn collect_leaves<'a>(
        &'a self,
        path: &mut Vec<&'a str>,
        out: &mut Vec<(Vec<&'a str>, &'a TaskNode)>,
    ) {
        match self {
            Self::Folder { name, children } => {
                path.push(name);
                for child in children {
                    child.collect_leaves(path, out);
                }
                path.pop();
            }
            leaf => out.push((path.clone(), leaf)),
        }
    }
}

/// Pause after the plan is computed, before committing it.
pub const PLAN_SETTLE_SECONDS: f64 = 0.25;
/// Pause for the gripper to close on the object.
pub const GRIPPER_SETTLE_SECONDS: f64 = 1.0;

pub fn frame_name(index: usize) -> String {
    format!("Frame {index}")
}

/// Plan, wait, then execute and wait for execution, grouped in a folder.
pub fn plan_and_execute(name: &str, plan: TaskAction) -> TaskNode {
    TaskNode::folder(
        name,
        vec![
            TaskNode::callback(name, plan),
            TaskNode::delay("wait", PLAN_SETTLE_SECONDS),
            TaskNode::callback("execute", TaskAction::CommitManipPlan),
            TaskNode::callback("wait for execute", TaskAction::WaitForExecute),
        ],
    )
}

/// Pick the box at `Frame <from>` and put it down at `Frame <to>`.
pub fn pick_and_place(from: usize, to: usize) -> TaskNode {
    let folder_name = format!("pick and place {from}->{to}");
    let (from, to) = (frame_name(from), frame_name(to));
    let target = |frame: &str| {
        TaskNode::callback(
            format!("Target {frame}"),
            TaskAction::TargetFrame(frame.to_string()),
        )
    };

    TaskNode::folder(
        folder_name,
        vec![
            target(&from),
            plan_and_execute("plan pregrasp", TaskAction::PlanPreGrasp),
            plan_and_execute("plan grasp", TaskAction::PlanGrasp),
            TaskNode::callback("close gripper", TaskAction::CloseGripper),
            TaskNode::delay("wait", GRIPPER_SETTLE_SECONDS),
            // Back off with the object before retargeting.
            plan_and_execute("plan prerelease", TaskAction::PlanPreGrasp),
            target(&to),
            plan_and_execute("plan prerelease", TaskAction::PlanPreGrasp),
            plan_and_execute("plan release", TaskAction::PlanGrasp),
            TaskNode::callback("open gripper", TaskAction::OpenGripper),
        ],
    )
}

/// Move the box from frame 1 to frame 2 and back.
pub fn default_task_tree() -> Vec<TaskNode> {
    vec![pick_and_place(1, 2), pick_and_place(2, 1)]
}

/// Buttons shown outside the task tree for manual stepping.
pub fn manual_buttons() -> Vec<(&'static str, TaskAction)> {
    vec![
        ("add grasp frames", TaskAction::AddGraspFrames),
        ("plan pregrasp", TaskAction::PlanPreGrasp),
        ("plan grasp", TaskAction::PlanGrasp),
    ]
}
