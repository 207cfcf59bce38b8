//! Persistent picker settings
//!
//! All settings live in one serializable struct. Missing fields take their
//! defaults, so a partial JSON document is a valid configuration.
//!
//! ```
//! use colorpick::config::PickerConfig;
//! use colorpick::color::ColorFormat;
//!
//! let cfg = PickerConfig::from_json(r#"{"color_format": "rgb"}"#).unwrap();
//! assert_eq!(cfg.color_format, ColorFormat::Rgb);
//! assert_eq!(cfg.analyze.max_points, 5);
//! ```

use crate::error::SessionResult;
use colorpick_color::ColorFormat;
use colorpick_record::AutoPickConfig;
use colorpick_region::AnalyzeConfig;
use serde::{Deserialize, Serialize};

/// Settings for a picking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// How recorded colors are displayed
    pub color_format: ColorFormat,
    /// Area analysis options
    pub analyze: AnalyzeConfig,
    /// Auto-pick options
    pub auto_pick: AutoPickConfig,
}

impl PickerConfig {
    /// Set the display format.
    pub fn with_color_format(mut self, color_format: ColorFormat) -> Self {
        self.color_format = color_format;
        self
    }

    /// Set the area analysis options.
    pub fn with_analyze(mut self, analyze: AnalyzeConfig) -> Self {
        self.analyze = analyze;
        self
    }

    /// Set the auto-pick options.
    pub fn with_auto_pick(mut self, auto_pick: AutoPickConfig) -> Self {
        self.auto_pick = auto_pick;
        self
    }

    /// Check every nested configuration.
    pub fn validate(&self) -> SessionResult<()> {
        self.analyze.validate()?;
        self.auto_pick.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use colorpick_record::AutoPickMode;

    #[test]
    fn test_defaults() {
        let cfg = PickerConfig::default();
        assert_eq!(cfg.color_format, ColorFormat::Hex);
        assert_eq!(cfg.analyze, AnalyzeConfig::default());
        assert_eq!(cfg.auto_pick.mode, AutoPickMode::Grid3x3);
        assert_eq!(cfg.auto_pick.spacing, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = PickerConfig::default()
            .with_color_format(ColorFormat::Decimal)
            .with_analyze(AnalyzeConfig::default().with_spacing(2))
            .with_auto_pick(AutoPickConfig::default().with_mode(AutoPickMode::Diamond));
        let json = cfg.to_json().unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_nested_partial_json() {
        let cfg = PickerConfig::from_json(
            r#"{"analyze": {"max_points": 9}, "auto_pick": {"mode": "circle", "spacing": 4}}"#,
        )
        .unwrap();
        assert_eq!(cfg.analyze.max_points, 9);
        assert_eq!(cfg.analyze.tolerance, 10);
        assert_eq!(cfg.auto_pick.mode, AutoPickMode::Circle);
    }

    #[test]
    fn test_invalid_json_values() {
        let err = PickerConfig::from_json(r#"{"analyze": {"spacing": 0}}"#).unwrap_err();
        assert!(matches!(err, SessionError::Region(_)));
        let err = PickerConfig::from_json(r#"{"auto_pick": {"spacing": 0}}"#).unwrap_err();
        assert!(matches!(err, SessionError::Record(_)));
        let err = PickerConfig::from_json(r#"{"color_format": "hsl"}"#).unwrap_err();
        assert!(matches!(err, SessionError::Config(_)));
    }
}
