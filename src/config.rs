use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::platform::Platform;

/// Default config file name, looked up in the current directory
pub const DEFAULT_CONFIG: &str = "nativeutils.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub jni: JniConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JniConfig {
    /// Java class declaring the native methods (`.` or `/` separated)
    #[serde(default = "default_class")]
    pub class: String,
}

impl Default for JniConfig {
    fn default() -> Self {
        Self {
            class: default_class(),
        }
    }
}

fn default_class() -> String {
    "deltix.NativeUtilsSample$Imports".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "default_library")]
    pub library: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            layout: default_layout(),
            library: default_library(),
        }
    }
}

fn default_root() -> String {
    "resources".to_string()
}

fn default_layout() -> String {
    "$(OS)/$(ARCH)".to_string()
}

fn default_library() -> String {
    "nativeutils_sample".to_string()
}

/// Load and parse a nativeutils.toml configuration file
pub fn load_config(path: &str) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("could not find `{}`", path)
            } else {
                anyhow::anyhow!("failed to read `{}`: {}", path, e)
            }
        })?;

    parse_config(&content).map_err(|e| anyhow::anyhow!("failed to parse `{}`: {}", path, e))
}

/// Load an explicitly requested config, or fall back to `nativeutils.toml`
/// and then to defaults when that file does not exist
pub fn resolve_config(explicit: Option<&str>) -> Result<Config> {
    resolve_config_in(Path::new("."), explicit)
}

/// Same as [`resolve_config`], with relative paths taken from `base_dir`
pub fn resolve_config_in(base_dir: &Path, explicit: Option<&str>) -> Result<Config> {
    let path = match explicit {
        Some(path) => base_dir.join(path),
        None => {
            let default_path = base_dir.join(DEFAULT_CONFIG);
            if !default_path.exists() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    load_config(&path.to_string_lossy())
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;

    validate_class_name(&config.jni.class)?;
    validate_resources(&config.resources)?;

    Ok(config)
}

/// Validate a Java binary class name such as `deltix.NativeUtilsSample$Imports`
fn validate_class_name(class: &str) -> Result<()> {
    if class.is_empty() {
        anyhow::bail!("Invalid JNI class name: must not be empty");
    }

    for part in class.split(['.', '/']) {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            anyhow::bail!("Invalid JNI class name '{}': empty segment", class);
        };

        if !(first.is_alphabetic() || first == '_' || first == '$') {
            anyhow::bail!(
                "Invalid JNI class name '{}'. Segment '{}' must start with a letter, '_' or '$'",
                class,
                part
            );
        }

        if let Some(ch) = chars.find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '$')) {
            anyhow::bail!(
                "Invalid JNI class name '{}'. Segment '{}' contains invalid character '{}'",
                class,
                part,
                ch
            );
        }
    }

    Ok(())
}

fn validate_resources(resources: &ResourcesConfig) -> Result<()> {
    if resources.library.trim().is_empty() {
        anyhow::bail!("resources.library must not be empty");
    }
    if resources.layout.trim().is_empty() {
        anyhow::bail!("resources.layout must not be empty");
    }

    // Catch unknown keys early; the version value does not affect validity
    if let Ok(platform) = Platform::detect() {
        platform.apply_template(&resources.layout, env!("CARGO_PKG_VERSION"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.jni.class, "deltix.NativeUtilsSample$Imports");
        assert_eq!(config.resources.root, "resources");
        assert_eq!(config.resources.layout, "$(OS)/$(ARCH)");
        assert_eq!(config.resources.library, "nativeutils_sample");
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [jni]
            class = "com.example.Native"

            [resources]
            root = "src/main/resources"
            "#,
        )
        .unwrap();

        assert_eq!(config.jni.class, "com.example.Native");
        assert_eq!(config.resources.root, "src/main/resources");
        assert_eq!(config.resources.layout, "$(OS)/$(ARCH)");
    }

    #[test]
    fn test_validate_class_name_valid() {
        assert!(validate_class_name("deltix.NativeUtilsSample$Imports").is_ok());
        assert!(validate_class_name("deltix/NativeUtilsSample$Imports").is_ok());
        assert!(validate_class_name("Measurements").is_ok());
        assert!(validate_class_name("com.my_app.Native2").is_ok());
    }

    #[test]
    fn test_validate_class_name_invalid() {
        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("com..Native").is_err());
        assert!(validate_class_name("com.1Native").is_err());
        assert!(validate_class_name("com.Nat-ive").is_err());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let result = parse_config(
            r#"
            [resources]
            layout = "$(OS)/$(TEMP)"
            "#,
        );
        assert!(result.is_err());

        let result = parse_config(
            r#"
            [resources]
            library = " "
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/definitely/not/here/nativeutils.toml").unwrap_err();
        assert!(err.to_string().contains("could not find"));
    }
}
