use log::warn;
use serde::{Deserialize, Serialize};

use shufflefit_domain::{DEFAULT_REST_SECONDS, Difficulty, RoutineLength};

pub const MAX_REST_SECONDS: u32 = 600;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub rest_seconds: u32,
    pub difficulty: Difficulty,
    pub length: RoutineLength,
    pub beep_volume: u8,
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|err| Error::Parse(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.rest_seconds == 0 || self.rest_seconds > MAX_REST_SECONDS {
            return Err(Error::RestSeconds(self.rest_seconds));
        }
        if self.beep_volume > 100 {
            return Err(Error::BeepVolume(self.beep_volume));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rest_seconds: DEFAULT_REST_SECONDS,
            difficulty: Difficulty::default(),
            length: RoutineLength::default(),
            beep_volume: 80,
        }
    }
}

/// Parse `json` if present. Invalid settings are logged and replaced by the defaults.
#[must_use]
pub fn load(json: Option<&str>) -> Settings {
    match json.map(Settings::from_json) {
        Some(Ok(settings)) => settings,
        Some(Err(err)) => {
            warn!("{err}, using default settings");
            Settings::default()
        }
        None => Settings::default(),
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid settings: {0}")]
    Parse(String),
    #[error("Rest must be between 1 and 600 seconds ({0})")]
    RestSeconds(u32),
    #[error("Beep volume must be 100 or less ({0} > 100)")]
    BeepVolume(u8),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        assert_eq!(
            Settings::default(),
            Settings {
                rest_seconds: 30,
                difficulty: Difficulty::Beginner,
                length: RoutineLength::Five,
                beep_volume: 80,
            }
        );
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[rstest]
    #[case("{}", Ok(Settings::default()))]
    #[case(
        r#"{"rest_seconds": 15, "difficulty": "advanced", "length": 10, "beep_volume": 0}"#,
        Ok(Settings {
            rest_seconds: 15,
            difficulty: Difficulty::Advanced,
            length: RoutineLength::Ten,
            beep_volume: 0,
        })
    )]
    #[case(
        r#"{"length": 3}"#,
        Ok(Settings { length: RoutineLength::Three, ..Settings::default() })
    )]
    #[case(r#"{"rest_seconds": 0}"#, Err(Error::RestSeconds(0)))]
    #[case(r#"{"rest_seconds": 601}"#, Err(Error::RestSeconds(601)))]
    #[case(r#"{"beep_volume": 101}"#, Err(Error::BeepVolume(101)))]
    fn test_settings_from_json(#[case] json: &str, #[case] expected: Result<Settings, Error>) {
        assert_eq!(Settings::from_json(json), expected);
    }

    #[rstest]
    #[case(None, Settings::default())]
    #[case(Some(r#"{"rest_seconds": 45}"#), Settings { rest_seconds: 45, ..Settings::default() })]
    #[case(Some(r#"{"rest_seconds": 0}"#), Settings::default())]
    #[case(Some("invalid"), Settings::default())]
    fn test_load(#[case] json: Option<&str>, #[case] expected: Settings) {
        assert_eq!(load(json), expected);
    }

    #[rstest]
    #[case(r#"{"length": 4}"#)]
    #[case(r#"{"difficulty": "expert"}"#)]
    #[case("[")]
    fn test_settings_from_json_invalid(#[case] json: &str) {
        assert!(matches!(Settings::from_json(json), Err(Error::Parse(_))));
    }
}
