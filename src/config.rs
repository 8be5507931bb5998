use crate::domain::Version;
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "semver-action.toml";

fn default_version() -> String {
    "v0.1.0".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Inputs controlling a release run.
///
/// Values come from an optional TOML file and are then overridden by
/// `INPUT_<NAME>` environment variables, the way CI runners pass action inputs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ActionInputs {
    /// Hosting service token. Only checked for presence when a release is
    /// requested; it is never written to outputs or the release request, so
    /// the step that submits the request supplies its own credentials.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_version")]
    pub default_version: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default)]
    pub create_release: bool,

    #[serde(default)]
    pub release_draft: bool,

    #[serde(default)]
    pub release_prerelease: bool,

    #[serde(default)]
    pub bump_patch_on_unknown: bool,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for ActionInputs {
    fn default() -> Self {
        ActionInputs {
            token: String::new(),
            default_version: default_version(),
            tag_prefix: default_tag_prefix(),
            create_release: false,
            release_draft: false,
            release_prerelease: false,
            bump_patch_on_unknown: false,
            dry_run: false,
            remote: default_remote(),
        }
    }
}

impl ActionInputs {
    /// Overlay `INPUT_*` values from a lookup function; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("INPUT_{}", name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let strings: [(&str, &mut String); 4] = [
            ("TOKEN", &mut self.token),
            ("DEFAULT-VERSION", &mut self.default_version),
            ("TAG-PREFIX", &mut self.tag_prefix),
            ("REMOTE", &mut self.remote),
        ];
        for (name, field) in strings {
            if let Some(value) = get(name) {
                *field = value;
            }
        }

        let flags: [(&str, &mut bool); 5] = [
            ("CREATE-RELEASE", &mut self.create_release),
            ("RELEASE-DRAFT", &mut self.release_draft),
            ("RELEASE-PRERELEASE", &mut self.release_prerelease),
            ("BUMP-PATCH-ON-UNKNOWN", &mut self.bump_patch_on_unknown),
            ("DRY-RUN", &mut self.dry_run),
        ];
        for (name, field) in flags {
            if let Some(value) = get(name) {
                *field = parse_bool(&value);
            }
        }
    }

    /// Check the inputs before any repository work starts.
    ///
    /// # Errors
    /// * [`ReleaseError::Config`] if a release is requested without a token
    /// * [`ReleaseError::InvalidVersionFormat`] if `default_version` does not parse
    pub fn validate(&self) -> Result<()> {
        if self.create_release && self.token.is_empty() {
            return Err(ReleaseError::config(
                "input 'token' is required when 'create-release' is enabled",
            ));
        }
        Version::parse(&self.default_version).map_err(|e| {
            ReleaseError::invalid_version(format!(
                "invalid default-version {:?}: {}",
                self.default_version, e
            ))
        })?;
        Ok(())
    }
}

/// Booleans are true only for a case-insensitive `true`
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads inputs from a TOML file (if any) without environment overrides.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-action.toml` in current directory
/// 3. `semver-action.toml` in the user config directory
/// 4. Defaults if no file is found
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&str>) -> Result<ActionInputs> {
    let Some(path) = config_file(config_path) else {
        return Ok(ActionInputs::default());
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content)
        .map_err(|e| ReleaseError::config(format!("cannot parse {}: {}", path.display(), e)))
}

/// Loads inputs from the config file, then applies `INPUT_*` environment overrides.
pub fn load_inputs(config_path: Option<&str>) -> Result<ActionInputs> {
    let mut inputs = load_config(config_path)?;
    inputs.apply_overrides(|name| env::var(name).ok());
    tracing::debug!(
        tag_prefix = %inputs.tag_prefix,
        default_version = %inputs.default_version,
        dry_run = inputs.dry_run,
        "loaded inputs"
    );
    Ok(inputs)
}
