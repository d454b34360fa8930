use std::path::PathBuf;

use thiserror::Error;

/// Startup configuration failures. All of these abort the process before it
/// begins serving.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file missing or unreadable.
    #[error("failed to read configuration file {path}: {source}")]
    Unreadable {
        /// Path that was attempted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML or is missing required keys.
    #[error("failed to parse configuration file: {0}")]
    Malformed(#[from] serde_yaml::Error),

    /// Listen or database protocol other than `tcp` or `unix`.
    #[error("unsupported protocol '{0}', expected tcp or unix")]
    UnsupportedProto(String),

    /// Only one of `--tlscert` and `--tlskey` was given.
    #[error("tlscert and tlskey must be provided together")]
    IncompleteTls,

    /// TLS was requested for a unix domain socket listener.
    #[error("TLS is not supported over a unix domain socket")]
    TlsOverUnixSocket,
}
