//! Static gesture classification over one hand's landmarks.
//!
//! Classification is a fixed, ordered list of geometric rules evaluated
//! first-match-wins. The rules are not mutually exclusive (a pointing pose
//! and a victory pose share conditions on the index finger), so the order
//! of [`RULES`] is the tie-break policy and must not be rearranged.

use muteconnect_core::{GestureCategory, HandJoint, LandmarkSet};

// Minimum horizontal offset between the thumb tip and the index tip for a
// thumbs up. Distinguishes an extended thumb from an incidental overlap.
const THUMB_MARGIN: f32 = 0.02;

type Predicate = fn(&LandmarkSet) -> bool;

/// Recognition rules in priority order
pub const RULES: [(GestureCategory, Predicate); 5] = [
    (GestureCategory::Fist, is_fist),
    (GestureCategory::OpenPalm, is_open_palm),
    (GestureCategory::ThumbsUp, is_thumbs_up),
    (GestureCategory::Pointing, is_pointing),
    (GestureCategory::Victory, is_victory),
];

/// Classify one hand. Returns `None` when no rule matches; an unrecognized
/// pose is not an error, there is simply no event for this hand.
pub fn classify(hand: &LandmarkSet) -> Option<GestureCategory> {
    for (category, predicate) in RULES.iter() {
        if predicate(hand) {
            return Some(*category);
        }
    }
    None
}

/// Classify every detected hand in one frame.
///
/// A later hand's match overwrites an earlier one; a later unmatched hand
/// does not clear an earlier match. This last-match-wins policy is a known
/// limitation, acceptable for a single-user, single-hand setup.
pub fn classify_hands(hands: &[LandmarkSet]) -> Option<GestureCategory> {
    let mut detected = None;
    for hand in hands {
        if let Some(category) = classify(hand) {
            detected = Some(category);
        }
    }
    detected
}

// All rules compare the normalized vertical axis, where a larger y is lower
// in the frame: a fingertip is curled when it sits below the joint it is
// compared against, extended when it sits above it.

fn below(hand: &LandmarkSet, a: HandJoint, b: HandJoint) -> bool {
    hand.point(a).y > hand.point(b).y
}

fn above(hand: &LandmarkSet, a: HandJoint, b: HandJoint) -> bool {
    hand.point(a).y < hand.point(b).y
}

/// All four fingertips curled under their proximal joints, thumb curled too
fn is_fist(hand: &LandmarkSet) -> bool {
    below(hand, HandJoint::IndexTip, HandJoint::IndexPip)
        && below(hand, HandJoint::MiddleTip, HandJoint::MiddlePip)
        && below(hand, HandJoint::RingTip, HandJoint::RingPip)
        && below(hand, HandJoint::PinkyTip, HandJoint::PinkyPip)
        && below(hand, HandJoint::ThumbTip, HandJoint::ThumbIp)
}

/// All four fingertips extended past their proximal joints
fn is_open_palm(hand: &LandmarkSet) -> bool {
    above(hand, HandJoint::IndexTip, HandJoint::IndexPip)
        && above(hand, HandJoint::MiddleTip, HandJoint::MiddlePip)
        && above(hand, HandJoint::RingTip, HandJoint::RingPip)
        && above(hand, HandJoint::PinkyTip, HandJoint::PinkyPip)
}

/// Thumb extended above the wrist while all four fingers are curled below
/// it, with the thumb clearly offset sideways from the index fingertip
fn is_thumbs_up(hand: &LandmarkSet) -> bool {
    above(hand, HandJoint::ThumbTip, HandJoint::Wrist)
        && below(hand, HandJoint::IndexTip, HandJoint::Wrist)
        && below(hand, HandJoint::MiddleTip, HandJoint::Wrist)
        && below(hand, HandJoint::RingTip, HandJoint::Wrist)
        && below(hand, HandJoint::PinkyTip, HandJoint::Wrist)
        && hand.point(HandJoint::ThumbTip).x < hand.point(HandJoint::IndexTip).x - THUMB_MARGIN
}

/// Index finger extended while the middle, ring, and pinky are curled
fn is_pointing(hand: &LandmarkSet) -> bool {
    above(hand, HandJoint::IndexTip, HandJoint::IndexPip)
        && below(hand, HandJoint::MiddleTip, HandJoint::MiddlePip)
        && below(hand, HandJoint::RingTip, HandJoint::RingPip)
        && below(hand, HandJoint::PinkyTip, HandJoint::PinkyPip)
}

/// Index and middle fingers extended while the ring and pinky are curled
fn is_victory(hand: &LandmarkSet) -> bool {
    above(hand, HandJoint::IndexTip, HandJoint::IndexPip)
        && above(hand, HandJoint::MiddleTip, HandJoint::MiddlePip)
        && below(hand, HandJoint::RingTip, HandJoint::RingPip)
        && below(hand, HandJoint::PinkyTip, HandJoint::PinkyPip)
}
