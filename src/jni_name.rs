use anyhow::{bail, Result};

/// Build the short JNI symbol for a native method, e.g.
/// `deltix.NativeUtilsSample$Imports` + `avg` ->
/// `Java_deltix_NativeUtilsSample_00024Imports_avg`.
///
/// The class may use either `.` or `/` as the package separator. Inner classes
/// keep their `$`, which is escaped like any other non-alphanumeric character.
pub fn jni_symbol(class: &str, method: &str) -> Result<String> {
    let class = mangle_class(class)?;
    let method = mangle_method(method)?;
    Ok(format!("Java_{}_{}", class, method))
}

/// Build the long (overloaded) JNI symbol, which appends `__` and the mangled
/// argument part of a method descriptor such as `(II)D`.
pub fn jni_symbol_overloaded(class: &str, method: &str, descriptor: &str) -> Result<String> {
    let short = jni_symbol(class, method)?;
    let args = descriptor_args(descriptor)?;
    Ok(format!("{}__{}", short, mangle_descriptor_args(args)))
}

fn mangle_class(class: &str) -> Result<String> {
    if class.is_empty() {
        bail!("Class name must not be empty");
    }

    let mut out = String::with_capacity(class.len());
    for (i, segment) in class.split(['.', '/']).enumerate() {
        if segment.is_empty() {
            bail!("Invalid class name '{}': empty segment", class);
        }
        if i > 0 {
            out.push('_');
        }
        escape_into(segment, &mut out);
    }

    Ok(out)
}

fn mangle_method(method: &str) -> Result<String> {
    if method.is_empty() {
        bail!("Method name must not be empty");
    }
    if method.contains(['.', '/']) {
        bail!("Invalid method name '{}': must not contain '.' or '/'", method);
    }

    let mut out = String::with_capacity(method.len());
    escape_into(method, &mut out);
    Ok(out)
}

/// Extract the text between `(` and `)` of a method descriptor.
fn descriptor_args(descriptor: &str) -> Result<&str> {
    let Some(rest) = descriptor.strip_prefix('(') else {
        bail!("Invalid method descriptor '{}': must start with '('", descriptor);
    };
    let Some(close) = rest.find(')') else {
        bail!("Invalid method descriptor '{}': missing ')'", descriptor);
    };
    if close + 1 == rest.len() {
        bail!("Invalid method descriptor '{}': missing return type", descriptor);
    }

    Ok(&rest[..close])
}

fn mangle_descriptor_args(args: &str) -> String {
    let mut out = String::with_capacity(args.len());
    for (i, segment) in args.split('/').enumerate() {
        if i > 0 {
            out.push('_');
        }
        escape_into(segment, &mut out);
    }
    out
}

/// Escape one name component per the JNI naming rules.
fn escape_into(name: &str, out: &mut String) {
    for unit in name.encode_utf16() {
        match char::from_u32(u32::from(unit)) {
            Some(c) if c.is_ascii_alphanumeric() => out.push(c),
            Some('_') => out.push_str("_1"),
            Some(';') => out.push_str("_2"),
            Some('[') => out.push_str("_3"),
            _ => out.push_str(&format!("_0{:04x}", unit)),
        }
    }
}
