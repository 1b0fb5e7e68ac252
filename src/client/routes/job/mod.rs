pub mod details;
pub mod jobs;
pub mod my_jobs;
pub mod post;

pub use details::JobDetails;
pub use jobs::Jobs;
pub use my_jobs::MyJobs;
pub use post::PostJob;

use dioxus::prelude::*;

use crate::model::job::JOB_CATEGORIES;

/// Category select shared by the post and edit forms
#[component]
fn CategorySelect(value: String, disabled: bool, on_change: EventHandler<String>) -> Element {
    rsx!(
        select {
            class: "select select-bordered w-full",
            value: "{value}",
            disabled: disabled,
            onchange: move |evt| on_change.call(evt.value()),
            option { value: "", selected: value.is_empty(), "Select Category" }
            for category in JOB_CATEGORIES {
                option { key: "{category}", value: "{category}", "{category}" }
            }
        }
    )
}
