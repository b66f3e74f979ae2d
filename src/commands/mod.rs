pub mod call;
pub mod exports;
pub mod header;
pub mod layout;
pub mod mangle;
pub mod stage;
