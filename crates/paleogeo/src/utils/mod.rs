pub mod chain;
pub mod color;
pub mod file;
