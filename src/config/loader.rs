// file: src/config/loader.rs
// version: 1.0.0
// guid: fa68a0d4-7403-4fcb-9db6-fd71d5af293b

//! Loading of host-provided configuration and relation snapshots with
//! environment variable substitution

use super::{GatewayConfig, InterfaceAddressing, DEFAULT_CHANNEL, DEFAULT_DNS};
use crate::error::GatewayError;
use crate::Result;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Charm options exactly as the host runtime stores them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    pub skip_networking: Option<bool>,
    pub sgi: Option<String>,
    pub s1: Option<String>,
    pub sgi_ipv4_address: Option<String>,
    pub sgi_ipv4_gateway: Option<String>,
    pub sgi_ipv6_address: Option<String>,
    pub sgi_ipv6_gateway: Option<String>,
    pub s1_ipv4_address: Option<String>,
    pub s1_ipv4_gateway: Option<String>,
    pub s1_ipv6_address: Option<String>,
    pub s1_ipv6_gateway: Option<String>,
    pub dns: Option<String>,
    pub block_agw_local_ips: Option<bool>,
    pub channel: Option<String>,
}

impl From<RawConfig> for GatewayConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            skip_networking: raw.skip_networking.unwrap_or(false),
            sgi: non_empty(raw.sgi),
            s1: non_empty(raw.s1),
            sgi_addressing: InterfaceAddressing {
                ipv4_address: non_empty(raw.sgi_ipv4_address),
                ipv4_gateway: non_empty(raw.sgi_ipv4_gateway),
                ipv6_address: non_empty(raw.sgi_ipv6_address),
                ipv6_gateway: non_empty(raw.sgi_ipv6_gateway),
            },
            s1_addressing: InterfaceAddressing {
                ipv4_address: non_empty(raw.s1_ipv4_address),
                ipv4_gateway: non_empty(raw.s1_ipv4_gateway),
                ipv6_address: non_empty(raw.s1_ipv6_address),
                ipv6_gateway: non_empty(raw.s1_ipv6_gateway),
            },
            dns: raw.dns.unwrap_or_else(|| DEFAULT_DNS.to_string()),
            block_agw_local_ips: raw.block_agw_local_ips.unwrap_or(true),
            channel: non_empty(raw.channel).unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load the operator configuration from a YAML or JSON file
    pub fn load_gateway_config<P: AsRef<Path>>(&self, path: P) -> Result<GatewayConfig> {
        let content = self.read(path.as_ref(), "configuration")?;
        self.parse_gateway_config(&content)
    }

    /// Parse the operator configuration from YAML or JSON text
    pub fn parse_gateway_config(&self, content: &str) -> Result<GatewayConfig> {
        let expanded = self.expand_env_vars(content)?;
        if expanded.trim().is_empty() {
            return Ok(GatewayConfig::default());
        }
        let raw: RawConfig = serde_yaml::from_str(&expanded)?;
        debug!("Loaded raw configuration: {:?}", raw);
        Ok(raw.into())
    }

    /// Load remote application relation data as a flat string map
    pub fn load_relation_data<P: AsRef<Path>>(&self, path: P) -> Result<BTreeMap<String, String>> {
        let content = self.read(path.as_ref(), "relation data")?;
        self.parse_relation_data(&content)
    }

    /// Parse relation data; scalar values are kept in their textual form.
    ///
    /// Relation data comes from the remote application and is taken verbatim,
    /// without `${VAR}` expansion.
    pub fn parse_relation_data(&self, content: &str) -> Result<BTreeMap<String, String>> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let values: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(content)?;

        let mut data = BTreeMap::new();
        for (key, value) in values {
            let text = match value {
                serde_yaml::Value::Null => continue,
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                other => {
                    return Err(GatewayError::config(format!(
                        "Relation data key '{}' is not a scalar: {:?}",
                        key, other
                    )))
                }
            };
            data.insert(key, text);
        }
        Ok(data)
    }

    fn read(&self, path: &Path, what: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            GatewayError::config(format!(
                "Failed to read {} file {}: {}",
                what,
                path.display(),
                e
            ))
        })
    }

    /// Expand `${VAR}` and `${VAR:-default}` references in the configuration
    /// snapshot, so site-specific values (interface names, addresses) can come
    /// from the unit's environment.
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .map_err(|e| GatewayError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing = BTreeSet::new();
        let expanded = re.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match (self.env_vars.get(name), caps.get(2)) {
                (Some(value), _) => value.clone(),
                (None, Some(default)) => default.as_str().to_string(),
                (None, None) => {
                    missing.insert(name.to_string());
                    String::new()
                }
            }
        });

        if !missing.is_empty() {
            let names: Vec<String> = missing.into_iter().collect();
            return Err(GatewayError::config(format!(
                "Missing environment variables: {}",
                names.join(", ")
            )));
        }

        Ok(expanded.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogicalInterface;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("AGW_SGI".to_string(), "enp0s1".to_string());

        let config = loader.parse_gateway_config("sgi: ${AGW_SGI}").unwrap();
        assert_eq!(config.sgi.as_deref(), Some("enp0s1"));
    }

    #[test]
    fn test_env_var_expansion_in_site_config() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("AGW_SGI_ADDRESS".to_string(), "192.168.0.2/24".to_string());
        loader.set_env_var("AGW_SGI_GATEWAY".to_string(), "192.168.0.1".to_string());

        let config = loader
            .parse_gateway_config(
                "sgi: ${AGW_SGI_IFACE:-enp0s1}\n\
                 s1: enp0s2\n\
                 sgi-ipv4-address: ${AGW_SGI_ADDRESS}\n\
                 sgi-ipv4-gateway: ${AGW_SGI_GATEWAY}\n\
                 dns: '${AGW_DNS:-[\"1.1.1.1\"]}'\n",
            )
            .unwrap();

        assert_eq!(config.sgi.as_deref(), Some("enp0s1"));
        assert_eq!(config.sgi_addressing.ipv4_address.as_deref(), Some("192.168.0.2/24"));
        assert_eq!(config.sgi_addressing.ipv4_gateway.as_deref(), Some("192.168.0.1"));
        assert_eq!(config.dns, r#"["1.1.1.1"]"#);
    }

    #[test]
    fn test_env_var_overrides_default() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("AGW_CHANNEL".to_string(), "1.9/edge".to_string());

        let config = loader
            .parse_gateway_config("channel: ${AGW_CHANNEL:-1.8/stable}")
            .unwrap();
        assert_eq!(config.channel, "1.9/edge");
    }

    #[test]
    fn test_missing_env_vars_are_listed_once() {
        let loader = ConfigLoader::new();
        let err = loader
            .parse_gateway_config("sgi: ${AGW_UNSET_FOR_TEST}\ns1: ${AGW_UNSET_FOR_TEST}\n")
            .unwrap_err();
        assert!(err
            .to_string()
            .ends_with("Missing environment variables: AGW_UNSET_FOR_TEST"));
    }

    #[test]
    fn test_relation_data_is_not_expanded() {
        let data = ConfigLoader::new()
            .parse_relation_data("root_ca_certificate: ${NOT_A_VARIABLE}\n")
            .unwrap();
        assert_eq!(data["root_ca_certificate"], "${NOT_A_VARIABLE}");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = ConfigLoader::new();
        let result = loader.parse_gateway_config("sgi: ${AGW_MISSING_VAR_FOR_TEST}");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables"));
    }

    #[test]
    fn test_empty_content_uses_defaults() {
        let loader = ConfigLoader::new();
        let config = loader.parse_gateway_config("").unwrap();
        assert_eq!(config, GatewayConfig::default());
    }

    #[test]
    fn test_kebab_case_keys_and_empty_values() {
        let loader = ConfigLoader::new();
        let config = loader
            .parse_gateway_config(
                r#"
skip-networking: false
sgi: enp0s1
s1: ""
sgi-ipv4-address: 10.0.0.2/24
sgi-ipv4-gateway: 10.0.0.1
s1-ipv6-address: ""
dns: '["1.1.1.1"]'
block-agw-local-ips: false
unknown-option: ignored
"#,
            )
            .unwrap();

        assert_eq!(config.interface_name(LogicalInterface::Sgi), Some("enp0s1"));
        assert_eq!(config.s1, None);
        assert_eq!(
            config.sgi_addressing.ipv4_address.as_deref(),
            Some("10.0.0.2/24")
        );
        assert_eq!(config.s1_addressing.ipv6_address, None);
        assert_eq!(config.dns, r#"["1.1.1.1"]"#);
        assert!(!config.block_agw_local_ips);
        assert_eq!(config.channel, DEFAULT_CHANNEL);
    }

    #[test]
    fn test_json_snapshot_is_accepted() {
        let loader = ConfigLoader::new();
        let config = loader
            .parse_gateway_config(r#"{"skip-networking": true, "channel": "1.8/edge"}"#)
            .unwrap();
        assert!(config.skip_networking);
        assert_eq!(config.channel, "1.8/edge");
    }

    #[test]
    fn test_load_gateway_config_from_file() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sgi: enp0s1\ns1: enp0s2").unwrap();

        let config = ConfigLoader::new().load_gateway_config(file.path())?;
        assert_eq!(config.sgi.as_deref(), Some("enp0s1"));
        assert_eq!(config.s1.as_deref(), Some("enp0s2"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = ConfigLoader::new().load_gateway_config("/nonexistent/agw-config.yaml");
        assert!(matches!(result, Err(GatewayError::ConfigError(_))));
    }

    #[test]
    fn test_relation_data_scalars_become_strings() {
        let loader = ConfigLoader::new();
        let data = loader
            .parse_relation_data(
                r#"
orchestrator_address: orchestrator.com
orchestrator_port: 42
empty_key:
"#,
            )
            .unwrap();
        assert_eq!(data.get("orchestrator_address").unwrap(), "orchestrator.com");
        assert_eq!(data.get("orchestrator_port").unwrap(), "42");
        assert!(!data.contains_key("empty_key"));
    }

    #[test]
    fn test_relation_data_rejects_nested_values() {
        let loader = ConfigLoader::new();
        let result = loader.parse_relation_data("nested:\n  key: value\n");
        assert!(result.is_err());
    }
}
