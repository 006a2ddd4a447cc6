//! Error types for camtriage.

/// Result type alias for camtriage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for camtriage.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration is malformed. Detected at startup; the process refuses
    /// to serve until corrected.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the validation failure.
        message: String,
    },

    /// Probability vector violates the classifier contract: wrong length,
    /// out-of-range value, or non-finite value.
    #[error("invalid probability distribution: {reason}")]
    InvalidDistribution {
        /// Description of the contract violation.
        reason: String,
    },

    /// Command-line arguments are inconsistent.
    #[error("{message}")]
    InvalidArguments {
        /// Description of the argument conflict.
        message: String,
    },

    /// No score files found in the provided paths.
    #[error("no score files found in the provided paths")]
    NoScoreFiles,

    /// Failed to read a score file.
    #[error("failed to read score file '{path}'")]
    ScoresRead {
        /// Path to the score file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a score file.
    #[error("failed to parse score file '{path}'")]
    ScoresParse {
        /// Path to the score file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Score file is structurally valid but violates the expected layout.
    #[error("invalid score file format: {message}")]
    InvalidScoreFormat {
        /// Description of the format error.
        message: String,
    },

    /// Unsupported score file extension.
    #[error("unsupported score file extension: {path}")]
    UnsupportedScoreExtension {
        /// Path with the unrecognized extension.
        path: std::path::PathBuf,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreate {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write JSON output file.
    #[error("failed to write JSON output file '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
