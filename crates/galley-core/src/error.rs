use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("beta branch {branch:?} requires a beta password, but none was provided")]
    MissingBetaPassword { branch: String },

    // ── Descriptor file loading ──
    #[error("failed to read steamapp descriptor at {path}")]
    DescriptorLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON steamapp descriptor at {path}")]
    DescriptorParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse TOML steamapp descriptor at {path}")]
    DescriptorParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("unsupported steamapp descriptor format at {path}; expected .json or .toml")]
    UnsupportedDescriptorFormat { path: PathBuf },
}
