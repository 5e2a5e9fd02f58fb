use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Branch name that selects the default, non-beta distribution channel.
pub const BRANCH_PUBLIC: &str = "public";

fn default_base_image() -> String {
    "docker.io/library/debian@sha256:8810492a2dd16b7f59239c1e0cc1e56c1a1a5957d11f639776bd6798e795608b".to_owned()
}

/// OS flavor steamcmd downloads depots for, passed via
/// `@sSteamCmdForcePlatformType`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformType {
    #[default]
    Linux,
    Windows,
    Macos,
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Macos => "macos",
        })
    }
}

/// A Steam-distributed dedicated server application and its desired runtime
/// packaging.
///
/// Field names match the upstream JSON API, so descriptors served over HTTP
/// and descriptors written by hand in TOML deserialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Steamapp {
    /// Steam application id of the dedicated server package.
    pub app_id: u32,
    /// OS flavor steamcmd fetches depots for.
    #[serde(default)]
    pub platform_type: PlatformType,
    /// Distribution branch. Absent, empty, or `"public"` selects the
    /// default branch.
    #[serde(default)]
    pub branch: Option<String>,
    /// Password granting access to a non-public branch.
    #[serde(default)]
    pub beta_password: Option<String>,
    /// Base image of the runtime stage.
    #[serde(default = "default_base_image")]
    pub base_image: String,
    /// Debian packages installed into the runtime stage, in order.
    #[serde(default)]
    pub apt_packages: Vec<String>,
    /// Shell commands run while assembling the runtime stage, in order.
    #[serde(default)]
    pub execs: Vec<String>,
    /// Image entrypoint argument vector.
    #[serde(default)]
    pub entrypoint: Vec<String>,
    /// Default command argument vector.
    #[serde(default)]
    pub cmd: Vec<String>,
}

impl Steamapp {
    /// Descriptor for `app_id` with every other field at its default.
    pub fn new(app_id: u32) -> Self {
        Self {
            app_id,
            platform_type: PlatformType::default(),
            branch: None,
            beta_password: None,
            base_image: default_base_image(),
            apt_packages: Vec::new(),
            execs: Vec::new(),
            entrypoint: Vec::new(),
            cmd: Vec::new(),
        }
    }

    /// Whether the descriptor selects a non-public branch.
    pub fn is_beta(&self) -> bool {
        self.branch
            .as_deref()
            .is_some_and(|b| !b.is_empty() && b != BRANCH_PUBLIC)
    }

    /// Check the beta-password invariant.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBetaPassword`](crate::Error::MissingBetaPassword) if a
    /// non-public branch is selected without a non-empty `beta_password`.
    pub fn validate(&self) -> crate::Result<()> {
        let has_password = self.beta_password.as_deref().is_some_and(|p| !p.is_empty());
        if self.is_beta() && !has_password {
            return Err(crate::Error::MissingBetaPassword {
                branch: self.branch.clone().unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Load a descriptor from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// - [`Error::DescriptorLoad`](crate::Error::DescriptorLoad) if the file cannot be read
    /// - [`Error::DescriptorParseJson`](crate::Error::DescriptorParseJson) /
    ///   [`Error::DescriptorParseToml`](crate::Error::DescriptorParseToml) on malformed content
    /// - [`Error::UnsupportedDescriptorFormat`](crate::Error::UnsupportedDescriptorFormat) for any other extension
    pub fn load(path: &Path) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "loading steamapp descriptor");

        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::DescriptorLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| crate::Error::DescriptorParseJson {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
            Some("toml") => {
                toml::from_str(&content).map_err(|e| crate::Error::DescriptorParseToml {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
            _ => Err(crate::Error::UnsupportedDescriptorFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
