//! Access to a backend's native container configuration.

use crate::ContainerConfig;

/// Container configuration carried by the data source, if any.
///
/// Only sources that natively have a build/runtime configuration (container
/// images) return `Some`. The default implementation returns `None`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsConfig`.
pub trait FsConfig: Send + Sync {
    /// The configuration descriptor, or `None` if the source has none.
    fn config(&self) -> Option<ContainerConfig> {
        None
    }

    /// The descriptor paired with whether it exists.
    ///
    /// Returns the empty descriptor and `false` when [`config`](Self::config)
    /// is `None`.
    fn config_or_default(&self) -> (ContainerConfig, bool) {
        match self.config() {
            Some(config) => (config, true),
            None => (ContainerConfig::default(), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoConfig;
    impl FsConfig for NoConfig {}

    struct Image;
    impl FsConfig for Image {
        fn config(&self) -> Option<ContainerConfig> {
            Some(ContainerConfig {
                user: Some("root".into()),
                ..Default::default()
            })
        }
    }

    #[test]
    fn fs_config_is_object_safe() {
        fn _check(_: &dyn FsConfig) {}
    }

    #[test]
    fn default_config_is_absent() {
        assert!(NoConfig.config().is_none());
        let (config, ok) = NoConfig.config_or_default();
        assert!(!ok);
        assert!(config.is_empty());
    }

    #[test]
    fn present_config_is_reported() {
        let (config, ok) = Image.config_or_default();
        assert!(ok);
        assert_eq!(config.user.as_deref(), Some("root"));
    }
}
