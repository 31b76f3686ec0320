use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for tandem-release.
///
/// Describes the two packages released in lockstep: the tag-versioned one and
/// the manifest-versioned one, plus the remote and changelog location.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote that release tags are pushed to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Repository-relative path of the changelog file
    #[serde(default = "default_changelog")]
    pub changelog: String,

    #[serde(default)]
    pub tagged: TaggedPackageConfig,

    #[serde(default)]
    pub manifest: ManifestPackageConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

/// Configuration for the tag-versioned package (ecosystem A).
///
/// Its releases exist only as version-control tags `<prefix>/vX.Y.Z`; consumers
/// resolve it through a module proxy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaggedPackageConfig {
    /// Tag prefix, also used as the package's display name
    #[serde(default = "default_tagged_prefix")]
    pub prefix: String,

    /// Full module path queried against the proxy after tagging.
    /// Empty disables the proxy-resolution step.
    #[serde(default)]
    pub module: String,

    /// Proxy the module listing is resolved against
    #[serde(default = "default_module_proxy")]
    pub proxy: String,
}

fn default_tagged_prefix() -> String {
    "server-go".to_string()
}

fn default_module_proxy() -> String {
    "proxy.golang.org".to_string()
}

impl Default for TaggedPackageConfig {
    fn default() -> Self {
        TaggedPackageConfig {
            prefix: default_tagged_prefix(),
            module: String::new(),
            proxy: default_module_proxy(),
        }
    }
}

/// Configuration for the manifest-versioned package (ecosystem B).
///
/// Versioned by its own package manager, which rewrites the manifest in place
/// and publishes to a registry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestPackageConfig {
    /// Display name used in changelog version headers
    #[serde(default = "default_manifest_name")]
    pub name: String,

    /// Repository-relative directory holding the package manifest
    #[serde(default = "default_manifest_dir")]
    pub dir: String,
}

fn default_manifest_name() -> String {
    "client-js".to_string()
}

fn default_manifest_dir() -> String {
    "client-js".to_string()
}

impl Default for ManifestPackageConfig {
    fn default() -> Self {
        ManifestPackageConfig {
            name: default_manifest_name(),
            dir: default_manifest_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            changelog: default_changelog(),
            tagged: TaggedPackageConfig::default(),
            manifest: ManifestPackageConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the repository root
/// 3. `~/.config/.release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `root` - Repository root the workflow operates on
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(
    root: &Path,
    config_path: Option<&str>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if root.join("release.toml").exists() {
        fs::read_to_string(root.join("release.toml"))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
