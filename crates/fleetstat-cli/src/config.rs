//! fleetstat.toml configuration parser.
//!
//! The config file is optional and only overrides the default file
//! locations. Precedence: CLI flag, then config file, then built-in
//! default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default host dataset path.
pub const DEFAULT_HOSTS: &str = "HostState.txt";
/// Default instance dataset path.
pub const DEFAULT_INSTANCES: &str = "InstanceState.txt";
/// Default report output path.
pub const DEFAULT_OUTPUT: &str = "Statistics.txt";

const CONFIG_FILE: &str = "fleetstat.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetstatConfig {
    pub inputs: Option<InputsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputsConfig {
    pub hosts: Option<PathBuf>,
    pub instances: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

/// The three file locations a command actually uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub hosts: PathBuf,
    pub instances: PathBuf,
    pub output: PathBuf,
}

impl FleetstatConfig {
    /// Load the config file.
    ///
    /// An explicitly passed path must exist; the implicit default
    /// `fleetstat.toml` is only read when present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FleetstatConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply precedence: CLI flag, config file, built-in default.
    pub fn resolve(
        &self,
        hosts: Option<PathBuf>,
        instances: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> ResolvedPaths {
        let inputs = self.inputs.clone().unwrap_or_default();
        let configured_output = self.output.clone().unwrap_or_default();
        ResolvedPaths {
            hosts: hosts
                .or(inputs.hosts)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HOSTS)),
            instances: instances
                .or(inputs.instances)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTANCES)),
            output: output
                .or(configured_output.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config() {
        let paths = FleetstatConfig::default().resolve(None, None, None);
        assert_eq!(paths.hosts, PathBuf::from(DEFAULT_HOSTS));
        assert_eq!(paths.instances, PathBuf::from(DEFAULT_INSTANCES));
        assert_eq!(paths.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config: FleetstatConfig = toml::from_str(
            r#"
[inputs]
hosts = "fleet/hosts.csv"

[output]
path = "fleet/report.txt"
"#,
        )
        .unwrap();

        let paths = config.resolve(None, None, None);
        assert_eq!(paths.hosts, PathBuf::from("fleet/hosts.csv"));
        assert_eq!(paths.instances, PathBuf::from(DEFAULT_INSTANCES));
        assert_eq!(paths.output, PathBuf::from("fleet/report.txt"));
    }

    #[test]
    fn cli_flags_override_the_config_file() {
        let config: FleetstatConfig = toml::from_str(
            r#"
[inputs]
hosts = "fleet/hosts.csv"
"#,
        )
        .unwrap();

        let paths = config.resolve(Some(PathBuf::from("cli-hosts.csv")), None, None);
        assert_eq!(paths.hosts, PathBuf::from("cli-hosts.csv"));
    }

    #[test]
    fn parses_an_empty_config() {
        let config: FleetstatConfig = toml::from_str("").unwrap();
        assert!(config.inputs.is_none());
        assert!(config.output.is_none());
    }
}
