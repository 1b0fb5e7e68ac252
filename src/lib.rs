//! JobZee: a job board web client for employers and job seekers.
//!
//! The app talks to the JobZee REST API with a cookie session. `client` holds the
//! Dioxus views, session store and API calls; `model` holds the wire types.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
