use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{self, ResourcesConfig};
use crate::platform::Platform;

/// Where the built library lives inside the resource tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    pub platform: Platform,
    pub directory: PathBuf,
    pub file_name: String,
}

impl ResourceLayout {
    pub fn resolve(resources: &ResourcesConfig, platform: Platform) -> Result<Self> {
        let relative = platform.apply_template(&resources.layout, env!("CARGO_PKG_VERSION"))?;

        Ok(ResourceLayout {
            platform,
            directory: PathBuf::from(&resources.root).join(relative),
            file_name: platform.library_file_name(&resources.library),
        })
    }

    pub fn library_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

pub fn execute(config_path: Option<&str>) -> Result<()> {
    let config = config::resolve_config(config_path)?;
    let layout = ResourceLayout::resolve(&config.resources, Platform::detect()?)?;

    println!("{} {}", format!("{:>10}", "Platform").green().bold(), layout.platform);
    println!("{} {}", format!("{:>10}", "Directory").green().bold(), layout.directory.display());
    println!("{} {}", format!("{:>10}", "Library").green().bold(), layout.file_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};

    #[test]
    fn test_resolve_default_layout() {
        let platform = Platform { os: Os::Linux, arch: Arch::X64 };
        let layout = ResourceLayout::resolve(&ResourcesConfig::default(), platform).unwrap();

        assert_eq!(layout.directory, PathBuf::from("resources").join("Linux/64"));
        assert_eq!(layout.file_name, "libnativeutils_sample.so");
        assert_eq!(
            layout.library_path(),
            PathBuf::from("resources/Linux/64/libnativeutils_sample.so")
        );
    }

    #[test]
    fn test_resolve_custom_layout() {
        let platform = Platform { os: Os::Windows, arch: Arch::X86 };
        let resources = ResourcesConfig {
            root: "out".to_string(),
            layout: "native/$(OS)-$(ARCH)".to_string(),
            library: "sample".to_string(),
        };
        let layout = ResourceLayout::resolve(&resources, platform).unwrap();

        assert_eq!(layout.library_path(), PathBuf::from("out/native/Windows-32/sample.dll"));
    }

    #[test]
    fn test_resolve_rejects_unknown_key() {
        let platform = Platform { os: Os::Linux, arch: Arch::X64 };
        let resources = ResourcesConfig {
            layout: "$(OS)/$(TEMP)".to_string(),
            ..Default::default()
        };
        assert!(ResourceLayout::resolve(&resources, platform).is_err());
    }
}
