//! Sample native library for P/Invoke and JNI consumers.
//!
//! The `cdylib` build exports `avg`, `ptrSize`, the JNI alias
//! `Java_deltix_NativeUtilsSample_00024Imports_avg` and, on Windows, `DllMain`.
//! The remaining modules back the `nativeutils` developer CLI.

pub mod codegen;
pub mod commands;
pub mod config;
pub mod export_table;
pub mod exports;
pub mod jni_name;
pub mod platform;

pub use exports::{avg, ptrSize, JNI_AVG_SYMBOL};
