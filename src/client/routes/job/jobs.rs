use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::Page,
        router::Route,
        store::toast::use_notifier,
        util::access::{Guard, Requirement},
    },
    model::job::JobDto,
};

#[component]
pub fn Jobs() -> Element {
    rsx!(
        Title { "All Jobs | JobZee" }
        Guard { requirement: Requirement::Authenticated,
            JobList {}
        }
    )
}

#[component]
fn JobList() -> Element {
    let notifier = use_notifier();

    // Retrieve all jobs on component load
    let jobs = use_resource(move || async move {
        match api::job::get_all_jobs().await {
            Ok(jobs) => jobs,
            Err(err) => {
                tracing::error!("Failed to fetch jobs: {}", err);
                notifier.error(err.user_message());

                Vec::new()
            }
        }
    });

    let jobs = jobs.read().clone();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                {match jobs {
                    None => rsx!(
                        h1 { class: "text-2xl", "Loading jobs..." }
                    ),
                    Some(jobs) if jobs.is_empty() => rsx!(
                        h1 { class: "text-2xl", "No jobs available" }
                    ),
                    Some(jobs) => rsx!(
                        h1 { class: "text-2xl font-semibold", "ALL AVAILABLE JOBS" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                            for job in jobs {
                                JobCard { key: "{job.id}", job: job.clone() }
                            }
                        }
                    ),
                }}
            }
        }
    )
}

#[component]
fn JobCard(job: JobDto) -> Element {
    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                p { span { class: "font-bold", "Title: " } "{job.title}" }
                p { span { class: "font-bold", "Category: " } "{job.category}" }
                p { span { class: "font-bold", "Country: " } "{job.country}" }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::JobDetails { id: job.id.clone() },
                        class: "btn btn-primary btn-sm",
                        "View Job Details"
                    }
                }
            }
        }
    )
}
