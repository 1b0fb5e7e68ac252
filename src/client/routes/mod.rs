pub mod application;
pub mod auth;
pub mod home;
pub mod job;
pub mod not_found;

pub use home::Home;
pub use not_found::NotFound;
