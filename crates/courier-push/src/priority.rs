//! Notification priority levels.
//!
//! A payload names one of five levels. Platforms consume the level in one of
//! two numeric encodings: channel importance (newer APIs) or legacy
//! notification priority. Both are derived from the same string, and both
//! are always available; choosing one is the renderer's concern.

use serde::{Deserialize, Serialize};

/// Named notification priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationPriority {
    /// `PRIORITY_MIN`
    #[serde(rename = "PRIORITY_MIN")]
    Min,
    /// `PRIORITY_LOW`
    #[serde(rename = "PRIORITY_LOW")]
    Low,
    /// `PRIORITY_DEFAULT`
    #[default]
    #[serde(rename = "PRIORITY_DEFAULT")]
    Default,
    /// `PRIORITY_HIGH`
    #[serde(rename = "PRIORITY_HIGH")]
    High,
    /// `PRIORITY_MAX`
    #[serde(rename = "PRIORITY_MAX")]
    Max,
}

impl NotificationPriority {
    /// Map a payload string to a level. Absent or unrecognized → `Default`.
    ///
    /// Matching is exact; `"priority_high"` is not recognized.
    pub fn from_payload(value: Option<&str>) -> Self {
        match value {
            Some("PRIORITY_MIN") => Self::Min,
            Some("PRIORITY_LOW") => Self::Low,
            Some("PRIORITY_HIGH") => Self::High,
            Some("PRIORITY_MAX") => Self::Max,
            _ => Self::Default,
        }
    }

    /// The payload string for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "PRIORITY_MIN",
            Self::Low => "PRIORITY_LOW",
            Self::Default => "PRIORITY_DEFAULT",
            Self::High => "PRIORITY_HIGH",
            Self::Max => "PRIORITY_MAX",
        }
    }

    /// Notification channel importance code (`IMPORTANCE_MIN` = 1 … `IMPORTANCE_MAX` = 5).
    pub fn importance(self) -> i32 {
        match self {
            Self::Min => 1,
            Self::Low => 2,
            Self::Default => 3,
            Self::High => 4,
            Self::Max => 5,
        }
    }

    /// Legacy notification priority code (`PRIORITY_MIN` = -2 … `PRIORITY_MAX` = 2).
    pub fn legacy_priority(self) -> i32 {
        match self {
            Self::Min => -2,
            Self::Low => -1,
            Self::Default => 0,
            Self::High => 1,
            Self::Max => 2,
        }
    }
}

impl std::fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel importance code for a payload priority string.
pub fn importance_from_str(value: Option<&str>) -> i32 {
    NotificationPriority::from_payload(value).importance()
}

/// Legacy priority code for a payload priority string.
pub fn priority_from_str(value: Option<&str>) -> i32 {
    NotificationPriority::from_payload(value).legacy_priority()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_maps_to_high_in_both_encodings() {
        assert_eq!(
            NotificationPriority::from_payload(Some("PRIORITY_HIGH")),
            NotificationPriority::High
        );
        assert_eq!(importance_from_str(Some("PRIORITY_HIGH")), 4);
        assert_eq!(priority_from_str(Some("PRIORITY_HIGH")), 1);
    }

    #[test]
    fn unknown_and_absent_map_to_default() {
        for value in [None, Some(""), Some("urgent"), Some("priority_high")] {
            assert_eq!(
                NotificationPriority::from_payload(value),
                NotificationPriority::Default
            );
            assert_eq!(importance_from_str(value), 3);
            assert_eq!(priority_from_str(value), 0);
        }
    }

    #[test]
    fn every_level_round_trips_through_its_string() {
        for level in [
            NotificationPriority::Min,
            NotificationPriority::Low,
            NotificationPriority::Default,
            NotificationPriority::High,
            NotificationPriority::Max,
        ] {
            assert_eq!(NotificationPriority::from_payload(Some(level.as_str())), level);
        }
    }

    #[test]
    fn encodings_are_ordered() {
        let levels = [
            NotificationPriority::Min,
            NotificationPriority::Low,
            NotificationPriority::Default,
            NotificationPriority::High,
            NotificationPriority::Max,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].importance() < pair[1].importance());
            assert!(pair[0].legacy_priority() < pair[1].legacy_priority());
        }
    }

    #[test]
    fn serde_uses_payload_strings() {
        let json = serde_json::to_value(NotificationPriority::Max).unwrap();
        assert_eq!(json, "PRIORITY_MAX");
    }
}
