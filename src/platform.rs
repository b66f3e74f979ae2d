use anyhow::{bail, Result};

use crate::exports::ptrSize;

/// Operating systems the resource layout knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Linux,
    Osx,
}

impl Os {
    /// Name used for the `$(OS)` key
    pub fn name(&self) -> &'static str {
        match self {
            Os::Windows => "Windows",
            Os::Linux => "Linux",
            Os::Osx => "OSX",
        }
    }

    /// Dynamic library extension without the dot
    pub fn dll_ext(&self) -> &'static str {
        match self {
            Os::Windows => "dll",
            Os::Linux => "so",
            Os::Osx => "dylib",
        }
    }
}

/// Pointer width of the build, used for the `$(ARCH)` key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X64,
}

impl Arch {
    pub fn from_pointer_size(bytes: i32) -> Result<Self> {
        match bytes {
            4 => Ok(Arch::X86),
            8 => Ok(Arch::X64),
            n => bail!("Unsupported pointer size: {} bytes", n),
        }
    }

    pub fn bits(&self) -> &'static str {
        match self {
            Arch::X86 => "32",
            Arch::X64 => "64",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Detect the platform this crate was compiled for
    pub fn detect() -> Result<Self> {
        let os = if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else if cfg!(target_os = "macos") {
            Os::Osx
        } else {
            bail!(
                "Unsupported platform: {}\n\
                Supported: Windows, Linux, macOS",
                std::env::consts::OS
            );
        };

        Ok(Platform {
            os,
            arch: Arch::from_pointer_size(ptrSize())?,
        })
    }

    /// File name the loader expects for a library called `name`
    pub fn library_file_name(&self, name: &str) -> String {
        match self.os {
            Os::Windows => format!("{}.{}", name, self.os.dll_ext()),
            Os::Linux | Os::Osx => format!("lib{}.{}", name, self.os.dll_ext()),
        }
    }

    /// Substitute `$(OS)`, `$(ARCH)`, `$(DLLEXT)` and `$(VERSION)` and reject
    /// anything left over
    pub fn apply_template(&self, template: &str, version: &str) -> Result<String> {
        let substituted = template
            .replace("$(DLLEXT)", self.os.dll_ext())
            .replace("$(OS)", self.os.name())
            .replace("$(ARCH)", self.arch.bits())
            .replace("$(VERSION)", version);

        verify_template(&substituted)?;
        Ok(substituted)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os.name(), self.arch.bits())
    }
}

/// Fail if a substituted template still contains a `$(` key
pub fn verify_template(substituted: &str) -> Result<()> {
    let Some(start) = substituted.find("$(") else {
        return Ok(());
    };

    let end = substituted[start..].find(')').map(|i| start + i);
    let next_start = substituted[start + 1..].find("$(").map(|i| start + 1 + i);

    let reason = match (end, next_start) {
        (None, _) => "Key not terminated",
        (Some(end), Some(next)) if next <= end => "Key not terminated",
        _ => "Unknown/unexpected key",
    };

    bail!(
        "Template substitution error: {} at position {}: {}",
        reason,
        start,
        &substituted[start..]
    )
}
