//! Turning a target into grasp frames for the planner.
//!
//! Frame creation and planning live in the host; this module only decides
//! which frames to ask for and in what order.

use crate::candidates::generate;
use crate::config::{GraspTarget, PanelConfig};
use crate::directory::{ObjectDirectory, TargetObject};
use crate::error::{GraspError, Result};
use crate::types::{GraspCandidateList, GraspOffset};
use tracing::{debug, info};

/// Affordance name used when targeting a named frame instead of a tracked body.
pub const BOX_AFFORDANCE: &str = "box";

/// Creates grasp and pregrasp frames attached to a target.
pub trait GraspFrameSink {
    fn make_grasp_frames(
        &mut self,
        target: &TargetObject,
        offset: &GraspOffset,
        pregrasp_offset: f64,
        suffix: &str,
    );
}

/// Planner state the panel drives.
pub trait GraspPlanner {
    fn set_affordance_name(&mut self, name: &str);

    /// Pick one of the grasp frames created for the current affordance.
    fn select_grasp_frame_suffix(&mut self);

    fn set_box_grasp_target(&mut self, target: &GraspTarget);

    /// Create the planner's own grasp frames for the box grasp target.
    fn add_grasp_frames(&mut self);
}

/// Create grasp frames for every candidate around the named target.
///
/// An empty name means no target is selected and nothing happens. A name
/// the directory does not know fails with [`GraspError::NotFound`].
pub fn add_grasp_frames_from_list<D, S, P>(
    directory: &D,
    sink: &mut S,
    planner: &mut P,
    target_name: &str,
) -> Result<Option<GraspCandidateList>>
where
    D: ObjectDirectory + ?Sized,
    S: GraspFrameSink + ?Sized,
    P: GraspPlanner + ?Sized,
{
    if target_name.is_empty() {
        debug!("no target selected, skipping grasp frames");
        return Ok(None);
    }

    let target = directory
        .lookup(target_name)
        .ok_or_else(|| GraspError::NotFound(target_name.to_string()))?;
    let candidates = generate(&target.dimensions())?;

    for candidate in &candidates {
        sink.make_grasp_frames(
            &target,
            &candidate.offset,
            candidate.pregrasp_offset,
            &candidate.suffix(),
        );
    }
    info!(
        object = target_name,
        count = candidates.len(),
        pregrasp_offset = candidates.pregrasp_offset(),
        "added grasp frames"
    );

    planner.set_affordance_name(target_name);
    planner.select_grasp_frame_suffix();
    Ok(Some(candidates))
}

/// Aim the planner at a box sitting at one of the configured named frames.
pub fn add_grasp_frame_from_property<P>(
    config: &PanelConfig,
    planner: &mut P,
    frame_name: &str,
) -> Result<GraspTarget>
where
    P: GraspPlanner + ?Sized,
{
    let frame = config.frame(frame_name)?;
    let dimensions = config.default_dimensions();
    dimensions.validate()?;

    let target = GraspTarget {
        position: frame.position,
        orientation: [0.0; 3],
        dimensions,
    };
    debug!(frame = frame_name, position = ?frame.position, "targeting named frame");

    planner.set_box_grasp_target(&target);
    planner.set_affordance_name(BOX_AFFORDANCE);
    planner.add_grasp_frames();
    Ok(target)
}

/// Apply the "update grasp target" properties to the planner.
pub fn update_grasp_target<P>(config: &PanelConfig, planner: &mut P) -> Result<GraspTarget>
where
    P: GraspPlanner + ?Sized,
{
    let target = config.grasp_target.to_target()?;
    planner.set_box_grasp_target(&target);
    planner.add_grasp_frames();
    Ok(target)
}
