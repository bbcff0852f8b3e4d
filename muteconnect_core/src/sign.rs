use serde::{Deserialize, Serialize};

/// A recognized static hand pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureCategory {
    Fist,
    OpenPalm,
    ThumbsUp,
    Pointing,
    Victory,
}

/// The canonical output vocabulary item that both the gesture and the
/// speech path resolve to. Each sign has a display label and an
/// illustration file derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Sign {
    Stop,
    Stand,
    Good,
    Go,
    Peace,
}

impl Sign {
    pub fn label(self) -> &'static str {
        match self {
            Sign::Stop => "Stop",
            Sign::Stand => "Stand",
            Sign::Good => "Good",
            Sign::Go => "Go",
            Sign::Peace => "Peace",
        }
    }

    /// File name of the sign's illustration, relative to the image directory
    pub fn image_file(self) -> String {
        format!("{}.png", self.label().to_lowercase())
    }
}

impl From<GestureCategory> for Sign {
    fn from(category: GestureCategory) -> Self {
        match category {
            GestureCategory::Fist => Sign::Stop,
            GestureCategory::OpenPalm => Sign::Stand,
            GestureCategory::ThumbsUp => Sign::Good,
            GestureCategory::Pointing => Sign::Go,
            GestureCategory::Victory => Sign::Peace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [GestureCategory; 5] = [
        GestureCategory::Fist,
        GestureCategory::OpenPalm,
        GestureCategory::ThumbsUp,
        GestureCategory::Pointing,
        GestureCategory::Victory,
    ];

    const ALL_SIGNS: [Sign; 5] = [Sign::Stop, Sign::Stand, Sign::Good, Sign::Go, Sign::Peace];

    #[test]
    fn test_every_sign_reachable_from_a_gesture() {
        // no orphan signs: the gesture vocabulary alone covers all of them
        for sign in ALL_SIGNS.iter() {
            assert!(
                ALL_CATEGORIES.iter().any(|c| Sign::from(*c) == *sign),
                "{:?} is not reachable from any gesture",
                sign
            );
        }
    }

    #[test]
    fn test_gesture_mapping_is_one_to_one() {
        for (i, a) in ALL_CATEGORIES.iter().enumerate() {
            for b in ALL_CATEGORIES.iter().skip(i + 1) {
                assert_ne!(Sign::from(*a), Sign::from(*b));
            }
        }
    }

    #[test]
    fn test_image_file_is_lowercased_label() {
        assert_eq!(Sign::Stop.image_file(), "stop.png");
        assert_eq!(Sign::Peace.image_file(), "peace.png");
    }
}
