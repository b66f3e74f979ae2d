//! The native export surface.
//!
//! Everything here is `#[no_mangle]` and reachable by symbol name from a
//! foreign loader: P/Invoke declares `avg`/`ptrSize` directly, the JVM resolves
//! the `Java_...` alias when `NativeUtilsSample.Imports.avg` is first called.
//!
//! `extern "C"` is the platform default convention: cdecl on 32-bit targets,
//! the Microsoft x64 convention on 64-bit Windows (which .NET treats as
//! fastcall). No per-target attribute is needed on the Rust side.

#![allow(non_snake_case)]

use jni::sys::{jclass, jdouble, jint, JNIEnv};

/// Symbol name of the JNI alias, kept next to the function it names.
pub const JNI_AVG_SYMBOL: &str = "Java_deltix_NativeUtilsSample_00024Imports_avg";

/// Average of two integers: `(a + b) * 0.5`.
///
/// The integer sum wraps on overflow before promotion to `f64`.
#[no_mangle]
pub extern "C" fn avg(a: i32, b: i32) -> f64 {
    f64::from(a.wrapping_add(b)) * 0.5
}

/// Width of a native pointer in bytes (4 or 8).
#[no_mangle]
pub extern "C" fn ptrSize() -> i32 {
    std::mem::size_of::<isize>() as i32
}

// `$` in `NativeUtilsSample$Imports` is encoded as `_00024`.
// The env/class handles are never dereferenced.
#[no_mangle]
pub extern "system" fn Java_deltix_NativeUtilsSample_00024Imports_avg(
    _env: *mut JNIEnv,
    _class: jclass,
    a: jint,
    b: jint,
) -> jdouble {
    avg(a, b)
}

#[cfg(windows)]
mod dll {
    use std::ffi::c_void;
    use windows::Win32::Foundation::{BOOL, HINSTANCE, TRUE};

    /// Loader notification hook; acknowledges every reason without doing any work.
    #[no_mangle]
    pub extern "system" fn DllMain(_instance: HINSTANCE, _reason: u32, _reserved: *mut c_void) -> BOOL {
        TRUE
    }

}

#[cfg(windows)]
pub use dll::DllMain;
