pub mod access;
pub mod file;
