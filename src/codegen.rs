use crate::exports::JNI_AVG_SYMBOL;

/// Generate a C header declaring the library's exports.
///
/// `NATIVE_API` picks the export attribute and convention per target the same
/// way the Rust side does at compile time.
pub fn generate_c_header(library: &str) -> String {
    let guard = format!("{}_H", library.to_uppercase().replace(['-', '.'], "_"));
    let mut out = String::new();

    out.push_str("// Generated by nativeutils. Do not edit.\n\n");
    out.push_str(&format!("#ifndef {}\n#define {}\n\n", guard, guard));
    out.push_str("#include <stdint.h>\n\n");

    out.push_str("#if defined(_WIN64)\n");
    out.push_str("#define NATIVE_API(x) extern __declspec(dllexport) x __fastcall\n");
    out.push_str("#elif defined(_WIN32)\n");
    // .NET P/Invoke supports cdecl/stdcall/thiscall on x86, not fastcall
    out.push_str("#define NATIVE_API(x) extern __declspec(dllexport) x __cdecl\n");
    out.push_str("#else\n");
    out.push_str("#define NATIVE_API(x) extern x __attribute__ ((visibility(\"default\")))\n");
    out.push_str("#endif\n\n");

    out.push_str("#if defined(_WIN32)\n");
    out.push_str("#ifndef WINAPI\n#define WINAPI __stdcall\n#endif\n");
    out.push_str(
        "extern __declspec(dllexport) int WINAPI DllMain(void *instance, uint32_t reason, void *reserved);\n",
    );
    out.push_str("#endif\n\n");

    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
    out.push_str("NATIVE_API(double) avg(int32_t a, int32_t b);\n");
    out.push_str("NATIVE_API(int32_t) ptrSize(void);\n");
    out.push_str(&format!(
        "NATIVE_API(double) {}(void *env, void *cls, int32_t a, int32_t b);\n",
        JNI_AVG_SYMBOL
    ));
    out.push_str("\n#ifdef __cplusplus\n}\n#endif\n\n");

    out.push_str(&format!("#endif /* {} */\n", guard));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_declares_exports() {
        let header = generate_c_header("nativeutils_sample");

        assert!(header.contains("#ifndef NATIVEUTILS_SAMPLE_H"));
        assert!(header.contains("NATIVE_API(double) avg(int32_t a, int32_t b);"));
        assert!(header.contains("NATIVE_API(int32_t) ptrSize(void);"));
        assert!(header.contains(
            "NATIVE_API(double) Java_deltix_NativeUtilsSample_00024Imports_avg(void *env, void *cls, int32_t a, int32_t b);"
        ));
        assert!(header.contains("int WINAPI DllMain(void *instance, uint32_t reason, void *reserved);"));
        assert!(header.trim_end().ends_with("#endif /* NATIVEUTILS_SAMPLE_H */"));
    }

    #[test]
    fn test_header_macro_selection() {
        let header = generate_c_header("x");
        let win64 = header.find("#if defined(_WIN64)").unwrap();
        let win32 = header.find("#elif defined(_WIN32)").unwrap();
        assert!(win64 < win32);
        assert!(header.contains("x __fastcall"));
        assert!(header.contains("x __cdecl"));
    }

    #[test]
    fn test_guard_sanitized() {
        assert!(generate_c_header("my-lib.v2").contains("#define MY_LIB_V2_H"));
    }
}
