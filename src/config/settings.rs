//! Service settings read from the environment.

use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CONFIG_DIR: &str = "./config/hubs";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for running the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Host or IP address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Root directory holding one directory per hub.
    pub config_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceSettings {
    /// Reads settings from `QUALIFY_*` environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings from a dotenv file at `path`.
    ///
    /// Variables already set in the process environment take precedence over
    /// the file, matching `dotenvy::dotenv`.
    pub fn from_env_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let mut file_values = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(|e| dotenv_error(path, e))? {
            let (key, value) = item.map_err(|e| dotenv_error(path, e))?;
            file_values.insert(key, value);
        }

        Self::from_lookup(|key| {
            env::var(key)
                .ok()
                .or_else(|| file_values.get(key).cloned())
        })
    }

    /// Reads settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("QUALIFY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| EngineError::InvalidSetting {
                    key: "QUALIFY_PORT".to_string(),
                    message: format!("'{}' is not a port number", raw),
                })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("QUALIFY_HOST").unwrap_or(defaults.host),
            port,
            config_dir: lookup("QUALIFY_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.config_dir),
            log_level: lookup("QUALIFY_LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Resolves the bind address.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| EngineError::InvalidSetting {
                key: "QUALIFY_HOST".to_string(),
                message: format!("'{}' is not an IP address", self.host),
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

fn dotenv_error(path: &Path, error: dotenvy::Error) -> EngineError {
    if error.not_found() {
        EngineError::ConfigNotFound {
            path: path.display().to_string(),
        }
    } else {
        EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = ServiceSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings, ServiceSettings::default());
        assert_eq!(settings.config_dir, PathBuf::from("./config/hubs"));
    }

    #[test]
    fn test_overrides_are_applied() {
        let settings = ServiceSettings::from_lookup(lookup_from(&[
            ("QUALIFY_HOST", "0.0.0.0"),
            ("QUALIFY_PORT", "8080"),
            ("QUALIFY_CONFIG_DIR", "/etc/qualifying/hubs"),
            ("QUALIFY_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.config_dir, PathBuf::from("/etc/qualifying/hubs"));
        assert_eq!(
            settings.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = ServiceSettings::from_lookup(lookup_from(&[("QUALIFY_PORT", "eighty")]));
        match result {
            Err(EngineError::InvalidSetting { key, .. }) => assert_eq!(key, "QUALIFY_PORT"),
            other => panic!("Expected InvalidSetting error, got {:?}", other),
        }
    }

    #[test]
    fn test_localhost_resolves_to_loopback() {
        let settings = ServiceSettings {
            host: "localhost".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_host_rejected() {
        let settings = ServiceSettings {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.socket_addr(),
            Err(EngineError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_env_file_values_are_read() {
        let dir = env::temp_dir().join(format!("qualify_settings_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("service.env");
        fs::write(
            &path,
            "# local overrides\nQUALIFY_CONFIG_DIR=/srv/hubs\nQUALIFY_LOG_LEVEL=\"qualifying_engine=debug\"\n",
        )
        .unwrap();

        let settings = ServiceSettings::from_env_file(&path).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(settings.config_dir, PathBuf::from("/srv/hubs"));
        assert_eq!(settings.log_level, "qualifying_engine=debug");
    }

    #[test]
    fn test_missing_env_file_is_config_not_found() {
        let path = env::temp_dir().join("qualify_settings_missing/none.env");
        match ServiceSettings::from_env_file(&path) {
            Err(EngineError::ConfigNotFound { path: reported }) => {
                assert!(reported.ends_with("none.env"))
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
