//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File path was not set
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to load configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration file
    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create configuration directory
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_file() -> PathBuf {
        PathBuf::from("/home/me/.config/todolist-tui/config.yml")
    }

    #[test]
    fn theme_parse_failure_names_the_value() {
        let error = ConfigError::DeserializationFailed("unknown variant `sepia`".to_string());
        assert!(error.to_string().contains("sepia"));
    }

    #[test]
    fn save_failure_names_the_file() {
        let error = ConfigError::SaveFailed {
            path: config_file(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("todolist-tui/config.yml"));
        assert!(error_str.contains("read-only"));
    }

    #[test]
    fn load_failure_names_the_file() {
        let error = ConfigError::LoadFailed {
            path: config_file(),
            message: "IO error: denied".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("config.yml"));
        assert!(error_str.contains("denied"));
    }

    #[test]
    fn missing_home_and_path_have_messages() {
        assert!(ConfigError::HomeDirectoryNotFound
            .to_string()
            .contains("home directory"));
        assert!(ConfigError::FilePathNotSet
            .to_string()
            .contains("file path not set"));
    }
}
