use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::week::WeekConfig;

pub const DEFAULT_INVALID_LABEL: &str = "N/A";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub week: Option<WeekSection>,
}

#[derive(Debug, Deserialize)]
pub struct WeekSection {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: Option<WeekConfig>,
    pub invalid_label:     Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::from_toml_str(&std::fs::read_to_string(&path)?)
        } else {
            Ok(AppConfig::default())
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn week_config(&self) -> WeekConfig {
        self.week.as_ref().and_then(|w| w.first_day_of_week).unwrap_or_default()
    }

    pub fn invalid_label(&self) -> &str {
        self.week.as_ref()
            .and_then(|w| w.invalid_label.as_deref())
            .unwrap_or(DEFAULT_INVALID_LABEL)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weekpick")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.week_config(), WeekConfig::MONDAY);
        assert_eq!(cfg.invalid_label(), "N/A");
    }

    #[test]
    fn week_section() {
        let cfg = AppConfig::from_toml_str(
            "[week]\nfirst_day_of_week = 0\ninvalid_label = \"no week\"\n",
        ).unwrap();
        assert_eq!(cfg.week_config(), WeekConfig::SUNDAY);
        assert_eq!(cfg.invalid_label(), "no week");
    }

    #[test]
    fn partial_section() {
        let cfg = AppConfig::from_toml_str("[week]\ninvalid_label = \"-\"\n").unwrap();
        assert_eq!(cfg.week_config(), WeekConfig::MONDAY);
        assert_eq!(cfg.invalid_label(), "-");
    }

    #[test]
    fn out_of_range_first_day_is_rejected() {
        let err = AppConfig::from_toml_str("[week]\nfirst_day_of_week = 7\n").unwrap_err();
        assert!(err.to_string().contains("first day of week"), "{err}");
    }
}
