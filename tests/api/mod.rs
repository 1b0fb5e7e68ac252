mod application;
mod error;
mod job;
mod user;
