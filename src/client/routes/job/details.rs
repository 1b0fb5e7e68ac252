use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::Page,
        router::Route,
        store::session::use_session,
        util::access::{Guard, Requirement},
    },
    model::job::JobDto,
};

#[component]
pub fn JobDetails(id: String) -> Element {
    rsx!(
        Title { "Job Details | JobZee" }
        Guard { requirement: Requirement::Authenticated,
            JobDetailsCard { id: id.clone() }
        }
    )
}

#[component]
fn JobDetailsCard(id: String) -> Element {
    let navigator = use_navigator();

    let job = use_resource(use_reactive!(|id| async move {
        match api::job::get_job(&id).await {
            Ok(job) => Some(job),
            Err(err) => {
                tracing::error!("Failed to fetch job {}: {}", id, err);
                navigator.replace(Route::NotFound {
                    segments: vec!["notfound".to_string()],
                });

                None
            }
        }
    }));

    let job = job.read().clone().flatten();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-3xl",
                div { class: "card-body",
                    if let Some(job) = job {
                        JobFields { job: job }
                    } else {
                        h3 { class: "card-title", "Loading Job Details..." }
                    }
                }
            }
        }
    )
}

/// Value or `N/A` for empty fields
fn or_na(value: &str) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx!(
        p {
            span { class: "font-bold", "{label}: " }
            "{value}"
        }
    )
}

#[component]
fn JobFields(job: JobDto) -> Element {
    let session = use_session();
    let is_employer = session.read().is_employer();

    rsx!(
        h3 { class: "card-title", "Job Details" }
        div { class: "flex flex-col gap-2",
            DetailRow { label: "Title", value: or_na(&job.title) }
            DetailRow { label: "Category", value: or_na(&job.category) }
            DetailRow { label: "Country", value: or_na(&job.country) }
            DetailRow { label: "City", value: or_na(&job.city) }
            DetailRow { label: "Location", value: or_na(&job.location) }
            DetailRow { label: "Description", value: or_na(&job.description) }
            DetailRow { label: "Job Posted On", value: job.posted_on_label() }
            DetailRow { label: "Salary", value: job.salary().to_string() }
        }
        div { class: "card-actions justify-end",
            if is_employer {
                p { class: "italic", "Employers cannot apply for jobs." }
            } else {
                Link {
                    to: Route::Apply { id: job.id.clone() },
                    class: "btn btn-primary",
                    "Apply Now"
                }
            }
        }
    )
}
