use serde::Deserialize;

/// Number of landmarks the hand model produces per detected hand
pub const LANDMARK_COUNT: usize = 21;

/// One hand landmark in normalized frame coordinates.
///
/// `x` grows toward the right edge of the frame and `y` grows toward the
/// bottom, so a smaller `y` means higher up in the frame. `z` is the
/// model's relative depth estimate and is not used by classification.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// The anatomical joints of the hand model, in landmark order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandJoint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

/// All landmarks of one detected hand in one frame.
///
/// Produced by a frame source and consumed read-only by the classifier;
/// nothing holds onto one past the frame it came from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LandmarkSet([Landmark; LANDMARK_COUNT]);

impl LandmarkSet {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    pub fn point(&self, joint: HandJoint) -> Landmark {
        self.0[joint as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_indices_follow_landmark_order() {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            p.x = i as f32;
        }
        let hand = LandmarkSet::new(points);

        assert_eq!(hand.point(HandJoint::Wrist).x, 0.0);
        assert_eq!(hand.point(HandJoint::ThumbTip).x, 4.0);
        assert_eq!(hand.point(HandJoint::IndexPip).x, 6.0);
        assert_eq!(hand.point(HandJoint::IndexTip).x, 8.0);
        assert_eq!(hand.point(HandJoint::PinkyTip).x, 20.0);
    }
}
