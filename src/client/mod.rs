pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod router;
pub mod routes;
pub mod store;
pub mod util;

pub use app::App;
