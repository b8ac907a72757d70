//! Error types for the Qualifying Engine.
//!
//! These errors belong to the surrounding service: configuration loading,
//! settings and hub lookup. Qualifying evaluation itself is total and never
//! produces an error.

use thiserror::Error;

/// The main error type for the Qualifying Engine.
///
/// # Example
///
/// ```
/// use qualifying_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/hub.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/hub.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configured qualifying threshold is not usable.
    #[error(
        "Invalid threshold for hub '{hub_id}' ({gender} / {level} / {score_type}): {message}"
    )]
    InvalidThreshold {
        /// The hub whose table contains the threshold.
        hub_id: String,
        /// The gender key.
        gender: String,
        /// The level key.
        level: String,
        /// The score-type key.
        score_type: String,
        /// What is wrong with the threshold.
        message: String,
    },

    /// No hub with the given identifier has been loaded.
    #[error("Hub not found: {hub_id}")]
    HubNotFound {
        /// The hub identifier that was requested.
        hub_id: String,
    },

    /// A service setting could not be interpreted.
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting {
        /// The environment key.
        key: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/hub.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/hub.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_threshold_displays_lookup_path() {
        let error = EngineError::InvalidThreshold {
            hub_id: "riverside".to_string(),
            gender: "Female".to_string(),
            level: "Level 7".to_string(),
            score_type: "all_around".to_string(),
            message: "state threshold must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid threshold for hub 'riverside' (Female / Level 7 / all_around): \
             state threshold must not be negative"
        );
    }

    #[test]
    fn test_hub_not_found_displays_id() {
        let error = EngineError::HubNotFound {
            hub_id: "nowhere".to_string(),
        };
        assert_eq!(error.to_string(), "Hub not found: nowhere");
    }

    #[test]
    fn test_invalid_setting_displays_key_and_message() {
        let error = EngineError::InvalidSetting {
            key: "QUALIFY_PORT".to_string(),
            message: "not a port number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid setting 'QUALIFY_PORT': not a port number"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_hub_not_found() -> EngineResult<()> {
            Err(EngineError::HubNotFound {
                hub_id: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_hub_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
