use anyhow::Result;

use crate::exports::{avg, ptrSize};

pub fn execute_avg(a: i32, b: i32) -> Result<()> {
    println!("{}", format_avg(a, b));
    Ok(())
}

pub fn execute_ptr_size() -> Result<()> {
    println!("ptrSize() = {}", ptrSize());
    Ok(())
}

// `{:?}` keeps the `.0` on whole results so the value reads as a double
fn format_avg(a: i32, b: i32) -> String {
    format!("avg({},{}) = {:?}", a, b, avg(a, b))
}
