use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{
        application::{Apply, MyApplications},
        auth::{Login, Register},
        job::{JobDetails, Jobs, MyJobs, PostJob},
        Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/job/getall")]
    Jobs {},

    #[route("/job/post")]
    PostJob {},

    #[route("/job/me")]
    MyJobs {},

    #[route("/job/:id")]
    JobDetails { id: String },

    #[route("/application/:id")]
    Apply { id: String },

    #[route("/applications/me")]
    MyApplications {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
