use anyhow::Result;

use crate::jni_name::{jni_symbol, jni_symbol_overloaded};

/// Print the JNI symbol a native method resolves to
pub fn execute(class: &str, method: &str, descriptor: Option<&str>) -> Result<()> {
    let symbol = match descriptor {
        Some(descriptor) => jni_symbol_overloaded(class, method, descriptor)?,
        None => jni_symbol(class, method)?,
    };

    println!("{}", symbol);
    Ok(())
}
