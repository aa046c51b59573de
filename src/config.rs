//! Container configuration descriptor.
//!
//! Backends whose data source natively carries build/runtime configuration
//! (container images) expose it through [`FsConfig`](crate::FsConfig). The
//! descriptor mirrors the `config` section of an OCI image configuration.
//! Plain directories never have one.

use std::collections::BTreeMap;

/// Runtime configuration of a container image.
///
/// `ContainerConfig::default()` is the empty descriptor.
///
/// With the `serde` feature, fields use the OCI JSON names (`User`, `Env`,
/// `Cmd`, ...), so the type deserializes straight from an image config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct ContainerConfig {
    /// User (and optionally group) the process runs as.
    pub user: Option<String>,
    /// Ports to expose, keyed as `port/protocol`.
    pub exposed_ports: BTreeMap<String, EmptyObject>,
    /// Environment entries in `KEY=value` form.
    pub env: Vec<String>,
    /// Entrypoint arguments.
    pub entrypoint: Vec<String>,
    /// Default arguments to the entrypoint.
    pub cmd: Vec<String>,
    /// Volume mount points.
    pub volumes: BTreeMap<String, EmptyObject>,
    /// Working directory of the process.
    pub working_dir: Option<String>,
    /// Arbitrary image labels.
    pub labels: BTreeMap<String, String>,
    /// Signal sent to stop the container.
    pub stop_signal: Option<String>,
}

/// The `{}` placeholder OCI uses as the value of set-like maps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmptyObject {}

impl ContainerConfig {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Look up an environment variable from [`env`](Self::env).
    ///
    /// Later entries win, matching how container runtimes apply `Env`.
    ///
    /// ```rust
    /// use scanfs::ContainerConfig;
    ///
    /// let config = ContainerConfig {
    ///     env: vec!["PATH=/usr/bin".into(), "SSL_CERT_DIR=/etc/ssl/certs".into()],
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.env_var("SSL_CERT_DIR"), Some("/etc/ssl/certs"));
    /// assert_eq!(config.env_var("HOME"), None);
    /// ```
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.iter().rev().find_map(|entry| {
            let (k, v) = entry.split_once('=')?;
            (k == key).then_some(v)
        })
    }
}

#[cfg(feature = "serde")]
impl ContainerConfig {
    /// Decode the `config` section of a full OCI image configuration document.
    ///
    /// A document without a `config` section yields the empty descriptor.
    ///
    /// # Errors
    ///
    /// - [`FsError::Config`](crate::FsError::Config) if the JSON is malformed
    pub fn from_image_config_json(bytes: &[u8]) -> Result<Self, crate::FsError> {
        #[derive(serde::Deserialize)]
        struct ImageConfig {
            #[serde(default, rename = "config")]
            config: Option<ContainerConfig>,
        }

        let image: ImageConfig =
            serde_json::from_slice(bytes).map_err(|e| crate::FsError::Config(e.to_string()))?;
        Ok(image.config.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(ContainerConfig::default().is_empty());
    }

    #[test]
    fn populated_is_not_empty() {
        let config = ContainerConfig {
            user: Some("nobody".into()),
            ..Default::default()
        };
        assert!(!config.is_empty());
    }

    #[test]
    fn env_var_last_entry_wins() {
        let config = ContainerConfig {
            env: vec!["A=1".into(), "MALFORMED".into(), "A=2".into()],
            ..Default::default()
        };
        assert_eq!(config.env_var("A"), Some("2"));
        assert_eq!(config.env_var("MALFORMED"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_image_config_json_reads_config_section() {
        let doc = br#"{
            "architecture": "amd64",
            "os": "linux",
            "config": {
                "User": "1000:1000",
                "Env": ["PATH=/usr/local/bin"],
                "Cmd": ["/bin/sh"],
                "ExposedPorts": {"443/tcp": {}},
                "WorkingDir": "/app",
                "Labels": {"org.opencontainers.image.title": "demo"}
            }
        }"#;
        let config = ContainerConfig::from_image_config_json(doc).unwrap();
        assert_eq!(config.user.as_deref(), Some("1000:1000"));
        assert_eq!(config.cmd, vec!["/bin/sh".to_string()]);
        assert!(config.exposed_ports.contains_key("443/tcp"));
        assert_eq!(config.working_dir.as_deref(), Some("/app"));
        assert_eq!(config.labels.len(), 1);
        assert!(config.entrypoint.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_image_config_json_without_config_is_empty() {
        let config = ContainerConfig::from_image_config_json(br#"{"os":"linux"}"#).unwrap();
        assert!(config.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_image_config_json_rejects_garbage() {
        let err = ContainerConfig::from_image_config_json(b"not json").unwrap_err();
        assert!(matches!(err, crate::FsError::Config(_)));
    }
}
