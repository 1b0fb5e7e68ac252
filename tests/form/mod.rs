mod application;
mod auth;
mod job;
