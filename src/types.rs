use crate::error::{GraspError, Result};
use itertools::Itertools;
use nalgebra as na;
use std::ops::Index;

/// Number of candidates produced for every box.
pub const CANDIDATE_COUNT: usize = 8;

/// Size of a rectangular target along its local X, Y and Z axes, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl BoxDimensions {
    pub const fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    pub fn is_valid(&self) -> bool {
        [self.dx, self.dy, self.dz]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Fails with [`GraspError::InvalidDimensions`] unless every side is
    /// positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GraspError::invalid_dimensions(self))
        }
    }
}

impl From<[f64; 3]> for BoxDimensions {
    fn from([dx, dy, dz]: [f64; 3]) -> Self {
        Self { dx, dy, dz }
    }
}

impl From<BoxDimensions> for [f64; 3] {
    fn from(dims: BoxDimensions) -> Self {
        [dims.dx, dims.dy, dims.dz]
    }
}

/// Gripper pose relative to the box center.
///
/// `orientation` holds roll, pitch and yaw in degrees, applied as
/// `Rz(yaw) * Ry(pitch) * Rx(roll)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraspOffset {
    pub position: [f64; 3],
    pub orientation: [f64; 3],
}

impl GraspOffset {
    pub fn rotation(&self) -> na::UnitQuaternion<f64> {
        let [roll, pitch, yaw] = self.orientation;
        na::UnitQuaternion::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    /// Transform from the gripper frame to the box frame.
    pub fn to_isometry(&self) -> na::Isometry3<f64> {
        let [x, y, z] = self.position;
        na::Isometry3::from_parts(na::Translation3::new(x, y, z), self.rotation())
    }
}

/// Side of the box the gripper comes from.
///
/// Named for a box whose long side is aligned with world Y, seen from the arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    Right,
    Below,
    Above,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraspCandidate {
    pub index: usize,
    pub approach: Approach,
    pub flipped: bool,
    pub offset: GraspOffset,
    /// Standoff along the approach axis before closing in. Negative.
    pub pregrasp_offset: f64,
}

impl GraspCandidate {
    /// Frame-name suffix the host uses to refer to this candidate.
    pub fn suffix(&self) -> String {
        format!(" {}", self.index)
    }
}

/// The eight grasp candidates computed for one box, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct GraspCandidateList {
    candidates: [GraspCandidate; CANDIDATE_COUNT],
}

impl GraspCandidateList {
    pub(crate) fn new(candidates: [GraspCandidate; CANDIDATE_COUNT]) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GraspCandidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GraspCandidate> {
        self.candidates.iter()
    }

    pub fn as_slice(&self) -> &[GraspCandidate] {
        &self.candidates
    }

    pub fn pregrasp_offset(&self) -> f64 {
        self.candidates[0].pregrasp_offset
    }

    /// Candidates that differ only by the gripper flip: (0, 1), (2, 3), ...
    pub fn flip_pairs(&self) -> impl Iterator<Item = (&GraspCandidate, &GraspCandidate)> + '_ {
        self.candidates.iter().tuples()
    }
}

impl Index<usize> for GraspCandidateList {
    type Output = GraspCandidate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.candidates[index]
    }
}

impl<'a> IntoIterator for &'a GraspCandidateList {
    type Item = &'a GraspCandidate;
    type IntoIter = std::slice::Iter<'a, GraspCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// A box target with a pose in the world, e.g. a tracked rigid body.
#[derive(Debug, Clone)]
pub struct OrientedBox {
    pub center: na::Point3<f64>,
    pub dimensions: BoxDimensions,
    pub rotation: na::UnitQuaternion<f64>,
}

impl OrientedBox {
    pub fn new(center: na::Point3<f64>, dimensions: BoxDimensions) -> Self {
        Self {
            center,
            dimensions,
            rotation: na::UnitQuaternion::identity(),
        }
    }

    pub fn with_rotation(mut self, rotation: na::UnitQuaternion<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Transform from the box frame to the world frame.
    pub fn pose(&self) -> na::Isometry3<f64> {
        na::Isometry3::from_parts(na::Translation3::from(self.center.coords), self.rotation)
    }

    pub fn world_pose(&self, offset: &GraspOffset) -> na::Isometry3<f64> {
        self.pose() * offset.to_isometry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn dimensions_validity() {
        assert!(BoxDimensions::new(0.06, 0.02, 0.09).is_valid());
        assert!(!BoxDimensions::new(0.0, 0.02, 0.09).is_valid());
        assert!(!BoxDimensions::new(0.06, -0.02, 0.09).is_valid());
        assert!(!BoxDimensions::new(0.06, 0.02, f64::NAN).is_valid());
        assert!(!BoxDimensions::new(f64::INFINITY, 0.02, 0.09).is_valid());
    }

    #[test]
    fn validate_reports_offending_box() {
        assert!(BoxDimensions::new(0.06, 0.02, 0.09).validate().is_ok());
        match BoxDimensions::new(0.06, -0.02, 0.09).validate() {
            Err(GraspError::InvalidDimensions { dy, .. }) => assert_eq!(dy, -0.02),
            other => panic!("expected InvalidDimensions, got {other:?}"),
        }
    }

    #[test]
    fn yaw_only_offset_rotates_x_onto_y() {
        let offset = GraspOffset {
            position: [0.0; 3],
            orientation: [0.0, 0.0, 90.0],
        };
        let x = offset.rotation() * na::Vector3::x();
        assert_relative_eq!(x, na::Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn euler_order_matches_zyx() {
        let offset = GraspOffset {
            position: [0.0; 3],
            orientation: [-90.0, 180.0, 90.0],
        };
        let expected = na::UnitQuaternion::from_axis_angle(&na::Vector3::z_axis(), FRAC_PI_2)
            * na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), std::f64::consts::PI)
            * na::UnitQuaternion::from_axis_angle(&na::Vector3::x_axis(), -FRAC_PI_2);
        assert_relative_eq!(offset.rotation().angle_to(&expected), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn world_pose_composes_box_and_offset() {
        let bbox = OrientedBox::new(na::Point3::new(1.0, 2.0, 3.0), BoxDimensions::new(0.1, 0.2, 0.3))
            .with_rotation(na::UnitQuaternion::from_euler_angles(0.0, 0.0, FRAC_PI_2));
        let offset = GraspOffset {
            position: [0.5, 0.0, 0.0],
            orientation: [0.0; 3],
        };
        let pose = bbox.world_pose(&offset);
        assert_relative_eq!(
            pose.translation.vector,
            na::Vector3::new(1.0, 2.5, 3.0),
            epsilon = 1e-12
        );
    }
}
