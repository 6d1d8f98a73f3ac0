//! Gripper approach poses around an oriented 3D box, and the pick-and-place
//! sequencing built on top of them.
//!
//! ```
//! use bbox3d_grasp::{generate, BoxDimensions};
//!
//! let candidates = generate(&BoxDimensions::new(0.06, 0.02, 0.09)).unwrap();
//! assert_eq!(candidates.len(), 8);
//! assert_eq!(candidates[0].offset.orientation, [-90.0, 180.0, 0.0]);
//! ```

mod candidates;
pub mod config;
pub mod directory;
mod error;
pub mod frames;
pub mod selection;
pub mod tasks;
mod types;

pub use crate::candidates::{generate, pregrasp_offset, PREGRASP_CLEARANCE};
pub use crate::config::{GraspTarget, PanelConfig};
pub use crate::directory::{lookup_dimensions, ObjectDirectory, ObjectRegistry, TargetObject};
pub use crate::error::{GraspError, Result};
pub use crate::frames::{
    add_grasp_frame_from_property, add_grasp_frames_from_list, update_grasp_target,
    GraspFrameSink, GraspPlanner,
};
pub use crate::selection::TargetSelection;
pub use crate::types::{
    Approach, BoxDimensions, GraspCandidate, GraspCandidateList, GraspOffset, OrientedBox,
    CANDIDATE_COUNT,
};
