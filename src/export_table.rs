use crate::exports::JNI_AVG_SYMBOL;

/// Calling convention a foreign caller must declare for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
    Cdecl,
    /// Microsoft x64; the only convention on 64-bit Windows
    Fastcall,
    Stdcall,
    /// JNICALL: stdcall on 32-bit Windows, the C convention everywhere else
    System,
}

impl CallingConvention {
    /// Convention of plain `extern "C"` exports on the current target
    pub const fn native() -> Self {
        if cfg!(all(windows, target_pointer_width = "64")) {
            CallingConvention::Fastcall
        } else {
            CallingConvention::Cdecl
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallingConvention::Cdecl => "cdecl",
            CallingConvention::Fastcall => "fastcall",
            CallingConvention::Stdcall => "stdcall",
            CallingConvention::System => "system",
        }
    }
}

impl std::fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpec {
    pub symbol: &'static str,
    pub signature: &'static str,
    pub convention: CallingConvention,
    pub note: &'static str,
}

/// Exports compiled into this build of the library
pub fn export_table() -> Vec<ExportSpec> {
    let mut table = vec![
        ExportSpec {
            symbol: "avg",
            signature: "(int32, int32) -> float64",
            convention: CallingConvention::native(),
            note: "(a + b) * 0.5",
        },
        ExportSpec {
            symbol: "ptrSize",
            signature: "() -> int32",
            convention: CallingConvention::native(),
            note: "pointer width in bytes",
        },
        ExportSpec {
            symbol: JNI_AVG_SYMBOL,
            signature: "(opaque, opaque, int32, int32) -> float64",
            convention: CallingConvention::System,
            note: "JNI alias of avg",
        },
    ];

    if cfg!(windows) {
        table.push(ExportSpec {
            symbol: "DllMain",
            signature: "(opaque, uint32, opaque) -> BOOL",
            convention: CallingConvention::Stdcall,
            note: "loader hook, always TRUE",
        });
    }

    table
}
