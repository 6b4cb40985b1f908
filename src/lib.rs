pub mod ast;
pub mod format;

pub type Result<T> = anyhow::Result<T>;
