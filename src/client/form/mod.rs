//! Form state and the checks run before a form's request is sent.

pub mod application;
pub mod auth;
pub mod job;

/// Field holds something other than whitespace
fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}
