/*
This code is part of the esri_shapefile library.
Authors: esri_shapefile contributors
Created: 19/10/2026
Last Modified: 19/10/2026
License: MIT
*/
use crate::error::{Result, ShapefileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

/// What to do with soft warnings such as truncated field names or a bad
/// file code.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WarningPolicy {
    /// Report through the `log` facade and carry on.
    #[default]
    Log,
    /// Carry on silently.
    Ignore,
    /// Abort the current operation with `ShapefileError::Warning`.
    Fail,
}

/// Codec settings, threaded through every reader and writer.
///
/// Can be backed by a JSON settings file:
///
/// ```json
/// { "on_warning": "fail", "verbose": false }
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    pub on_warning: WarningPolicy,
    pub verbose: bool,
}

impl Default for CodecConfig {
    fn default() -> CodecConfig {
        CodecConfig {
            on_warning: WarningPolicy::Log,
            verbose: false,
        }
    }
}

impl CodecConfig {
    pub fn new(on_warning: WarningPolicy) -> CodecConfig {
        CodecConfig {
            on_warning,
            ..Default::default()
        }
    }

    /// Loads settings from a JSON file. A missing file yields the defaults;
    /// a malformed one is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CodecConfig> {
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                ShapefileError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CodecConfig::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ShapefileError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Applies the warning policy to a soft warning.
    pub fn warn<S: Into<String>>(&self, message: S) -> Result<()> {
        match self.on_warning {
            WarningPolicy::Log => {
                log::warn!("{}", message.into());
                Ok(())
            }
            WarningPolicy::Ignore => Ok(()),
            WarningPolicy::Fail => Err(ShapefileError::Warning(message.into())),
        }
    }

    /// Progress messages, emitted only in verbose mode.
    pub(crate) fn progress<S: AsRef<str>>(&self, message: S) {
        if self.verbose {
            log::info!("{}", message.as_ref());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_warning_policies() {
        assert!(CodecConfig::new(WarningPolicy::Log).warn("soft").is_ok());
        assert!(CodecConfig::new(WarningPolicy::Ignore).warn("soft").is_ok());
        match CodecConfig::new(WarningPolicy::Fail).warn("soft") {
            Err(ShapefileError::Warning(msg)) => assert_eq!(msg, "soft"),
            other => panic!("expected a warning failure, got {:?}", other),
        }
    }

    #[test]
    fn test_json_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let configs = CodecConfig {
            on_warning: WarningPolicy::Fail,
            verbose: true,
        };
        configs.save(&path).unwrap();
        assert_eq!(CodecConfig::from_file(&path).unwrap(), configs);

        fs::write(&path, r#"{ "on_warning": "ignore" }"#).unwrap();
        let partial = CodecConfig::from_file(&path).unwrap();
        assert_eq!(partial.on_warning, WarningPolicy::Ignore);
        assert!(!partial.verbose);
    }

    #[test]
    fn test_missing_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let configs = CodecConfig::from_file(dir.path().join("nope.json")).unwrap();
        assert_eq!(configs, CodecConfig::default());
    }
}
