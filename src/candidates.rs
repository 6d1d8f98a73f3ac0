use crate::error::Result;
use crate::types::{
    Approach, BoxDimensions, GraspCandidate, GraspCandidateList, GraspOffset, CANDIDATE_COUNT,
};

/// Extra standoff past the box half-length before the gripper closes in.
pub const PREGRASP_CLEARANCE: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// One row of the candidate table: the gripper sits a quarter of the box
/// length from the center along `axis`, on the `sign` side.
#[derive(Debug, Clone, Copy)]
struct CandidateTemplate {
    approach: Approach,
    flipped: bool,
    axis: Axis,
    sign: f64,
    orientation: [f64; 3],
}

impl CandidateTemplate {
    const fn new(
        approach: Approach,
        flipped: bool,
        axis: Axis,
        sign: f64,
        orientation: [f64; 3],
    ) -> Self {
        Self {
            approach,
            flipped,
            axis,
            sign,
            orientation,
        }
    }

    fn position(&self, dims: &BoxDimensions) -> [f64; 3] {
        match self.axis {
            Axis::X => [self.sign * dims.dx / 4.0, 0.0, 0.0],
            Axis::Y => [0.0, self.sign * dims.dy / 4.0, 0.0],
        }
    }
}

// The gripper faces along its own X axis. A flip negates the roll.
const CANDIDATE_TABLE: [CandidateTemplate; CANDIDATE_COUNT] = [
    CandidateTemplate::new(Approach::Right, false, Axis::X, 1.0, [-90.0, 180.0, 0.0]),
    CandidateTemplate::new(Approach::Right, true, Axis::X, 1.0, [90.0, 180.0, 0.0]),
    CandidateTemplate::new(Approach::Below, false, Axis::Y, 1.0, [-90.0, 180.0, 90.0]),
    CandidateTemplate::new(Approach::Below, true, Axis::Y, 1.0, [90.0, 180.0, 90.0]),
    CandidateTemplate::new(Approach::Above, false, Axis::Y, -1.0, [-90.0, 0.0, 90.0]),
    CandidateTemplate::new(Approach::Above, true, Axis::Y, -1.0, [90.0, 0.0, 90.0]),
    CandidateTemplate::new(Approach::Left, false, Axis::X, -1.0, [-90.0, 0.0, 0.0]),
    CandidateTemplate::new(Approach::Left, true, Axis::X, -1.0, [90.0, 0.0, 0.0]),
];

/// Backoff along the approach axis shared by every candidate of a box.
pub fn pregrasp_offset(dims: &BoxDimensions) -> f64 {
    -(dims.dx / 2.0 + PREGRASP_CLEARANCE)
}

/// Enumerate the eight gripper approach poses for a box of the given size.
///
/// Right, below, above and left approaches, each in both gripper
/// orientations. Fails with [`GraspError::InvalidDimensions`] if any
/// dimension is not a positive finite number.
pub fn generate(dims: &BoxDimensions) -> Result<GraspCandidateList> {
    dims.validate()?;

    let pregrasp_offset = pregrasp_offset(dims);
    let candidates = std::array::from_fn(|index| {
        let template = &CANDIDATE_TABLE[index];
        GraspCandidate {
            index,
            approach: template.approach,
            flipped: template.flipped,
            offset: GraspOffset {
                position: template.position(dims),
                orientation: template.orientation,
            },
            pregrasp_offset,
        }
    });

    Ok(GraspCandidateList::new(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraspError;
    use approx::assert_relative_eq;

    #[test]
    fn robot_toy_candidates() {
        let list = generate(&BoxDimensions::new(0.06, 0.02, 0.09)).unwrap();
        assert_eq!(list.len(), 8);

        let first = &list[0];
        assert_relative_eq!(first.offset.position[0], 0.015, epsilon = 1e-12);
        assert_eq!(first.offset.position[1], 0.0);
        assert_eq!(first.offset.position[2], 0.0);
        assert_eq!(first.offset.orientation, [-90.0, 180.0, 0.0]);
        assert_relative_eq!(first.pregrasp_offset, -0.05, epsilon = 1e-12);
        assert_eq!(first.approach, Approach::Right);
        assert!(!first.flipped);
    }

    #[test]
    fn table_order() {
        let dims = BoxDimensions::new(0.4, 0.8, 0.1);
        let list = generate(&dims).unwrap();
        let expected = [
            ([0.1, 0.0, 0.0], [-90.0, 180.0, 0.0]),
            ([0.1, 0.0, 0.0], [90.0, 180.0, 0.0]),
            ([0.0, 0.2, 0.0], [-90.0, 180.0, 90.0]),
            ([0.0, 0.2, 0.0], [90.0, 180.0, 90.0]),
            ([0.0, -0.2, 0.0], [-90.0, 0.0, 90.0]),
            ([0.0, -0.2, 0.0], [90.0, 0.0, 90.0]),
            ([-0.1, 0.0, 0.0], [-90.0, 0.0, 0.0]),
            ([-0.1, 0.0, 0.0], [90.0, 0.0, 0.0]),
        ];
        for (candidate, (position, orientation)) in list.iter().zip(expected) {
            assert_eq!(candidate.offset.position, position);
            assert_eq!(candidate.offset.orientation, orientation);
        }
        let approaches: Vec<_> = list.iter().map(|c| c.approach).collect();
        assert_eq!(
            approaches,
            [
                Approach::Right,
                Approach::Right,
                Approach::Below,
                Approach::Below,
                Approach::Above,
                Approach::Above,
                Approach::Left,
                Approach::Left
            ]
        );
    }

    #[test]
    fn suffixes_follow_index() {
        let list = generate(&BoxDimensions::new(0.1, 0.2, 0.3)).unwrap();
        let suffixes: Vec<_> = list.iter().map(|c| c.suffix()).collect();
        assert_eq!(suffixes[0], " 0");
        assert_eq!(suffixes[7], " 7");
    }

    #[test]
    fn zero_or_negative_dimension_is_rejected() {
        for dims in [
            BoxDimensions::new(0.0, 0.02, 0.09),
            BoxDimensions::new(-0.06, 0.02, 0.09),
            BoxDimensions::new(0.06, 0.0, 0.09),
            BoxDimensions::new(0.06, 0.02, -1.0),
        ] {
            assert!(matches!(
                generate(&dims),
                Err(GraspError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn pregrasp_ignores_dy_and_dz() {
        let a = pregrasp_offset(&BoxDimensions::new(0.2, 0.1, 0.1));
        let b = pregrasp_offset(&BoxDimensions::new(0.2, 0.9, 0.5));
        assert_eq!(a, b);
        assert_relative_eq!(a, -0.12, epsilon = 1e-12);
    }
}
