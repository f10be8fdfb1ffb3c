//! Player preferences
//!
//! Persisted between runs and applied live to the current run. Writes go
//! through [`Settings::merged`] so out-of-range values from disk or from a
//! host UI can never reach the simulation.

use serde::{Deserialize, Serialize};

/// Hazard speed multiplier for each difficulty level, levels 1 through 5.
const SPEED_LEVELS: [f32; 5] = [1.0, 1.5, 2.0, 3.0, 4.0];

/// Validated player preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Overlay opacity, 0.2 - 1.0
    pub ui_opacity: f32,
    /// Base difficulty level, 1 - 5
    pub speed_level: u8,
    /// Ramp hazard speed as the run goes on
    pub difficulty_progression: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_opacity: 1.0,
            speed_level: 3,
            difficulty_progression: true,
        }
    }
}

impl Settings {
    /// Apply a patch, clamping each supplied field to its valid range.
    /// Fields the patch leaves unset keep their current value.
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        Self {
            ui_opacity: patch
                .ui_opacity
                .map_or(self.ui_opacity, |v| v.clamp(0.2, 1.0)),
            speed_level: patch
                .speed_level
                .map_or(self.speed_level, |v| v.clamp(1, 5)),
            difficulty_progression: patch
                .difficulty_progression
                .unwrap_or(self.difficulty_progression),
        }
    }

    /// Base speed multiplier for the current level.
    pub fn speed_multiplier(&self) -> f32 {
        SPEED_LEVELS[(self.speed_level.clamp(1, 5) - 1) as usize]
    }
}

/// Partial settings update. `None` fields leave the target untouched, so a
/// file written by an older build still loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub ui_opacity: Option<f32>,
    pub speed_level: Option<u8>,
    pub difficulty_progression: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui_opacity, 1.0);
        assert_eq!(settings.speed_level, 3);
        assert!(settings.difficulty_progression);
        assert_eq!(settings.speed_multiplier(), 2.0);
    }

    #[test]
    fn test_merge_clamps_out_of_range_values() {
        let merged = Settings::default().merged(&SettingsPatch {
            ui_opacity: Some(7.5),
            speed_level: Some(0),
            difficulty_progression: None,
        });
        assert_eq!(merged.ui_opacity, 1.0);
        assert_eq!(merged.speed_level, 1);

        let merged = Settings::default().merged(&SettingsPatch {
            ui_opacity: Some(-0.3),
            speed_level: Some(99),
            difficulty_progression: None,
        });
        assert_eq!(merged.ui_opacity, 0.2);
        assert_eq!(merged.speed_level, 5);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = Settings {
            ui_opacity: 0.5,
            speed_level: 4,
            difficulty_progression: false,
        };
        let merged = base.merged(&SettingsPatch {
            speed_level: Some(2),
            ..SettingsPatch::default()
        });
        assert_eq!(merged.ui_opacity, 0.5);
        assert_eq!(merged.speed_level, 2);
        assert!(!merged.difficulty_progression);
    }

    #[test]
    fn test_speed_multiplier_per_level() {
        let expected = [1.0, 1.5, 2.0, 3.0, 4.0];
        for level in 1..=5u8 {
            let settings = Settings {
                speed_level: level,
                ..Settings::default()
            };
            assert_eq!(settings.speed_multiplier(), expected[level as usize - 1]);
        }
    }

    #[test]
    fn test_patch_roundtrip_through_json() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let patch: SettingsPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(patch.ui_opacity, Some(1.0));
        assert_eq!(patch.speed_level, Some(3));
        assert_eq!(patch.difficulty_progression, Some(true));

        let empty: SettingsPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SettingsPatch::default());
    }
}
