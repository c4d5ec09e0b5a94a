//! Configuration validation.
//!
//! Pure function: `&ServerConfig → Result<(), Vec<ValidationError>>`.
//! Runs before anything is bound.

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a [`ServerConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bind address {0} is not a loopback address")]
    NotLoopback(std::net::SocketAddr),

    #[error("root {0} is not a directory")]
    RootNotDirectory(std::path::PathBuf),

    #[error("log filter must not be empty")]
    EmptyLogFilter,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let addr = config.listener.bind_address;
    if !addr.ip().is_loopback() {
        errors.push(ValidationError::NotLoopback(addr));
    }

    if !config.root.is_dir() {
        errors.push(ValidationError::RootNotDirectory(config.root.clone()));
    }

    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn default_config_in_existing_dir_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::with_root(dir.path());
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn ipv6_loopback_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::with_root(dir.path());
        config.listener.bind_address = "[::1]:8000".parse().unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_public_bind_address() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::with_root(dir.path());
        let public: SocketAddr = "0.0.0.0:8000".parse().unwrap();
        config.listener.bind_address = public;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NotLoopback(public)]);
    }

    #[test]
    fn reports_all_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let mut config = ServerConfig::with_root(&missing);
        config.listener.bind_address = "192.168.1.10:8000".parse().unwrap();
        config.observability.log_filter = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::RootNotDirectory(missing)));
        assert!(errors.contains(&ValidationError::EmptyLogFilter));
    }

    #[test]
    fn file_root_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ServerConfig::with_root(file.path());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::RootNotDirectory(file.path().to_path_buf())])
        );
    }
}
