use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{ApplicationCard, Page, ResumeModal},
        store::{session::use_session, toast::use_notifier},
        util::access::{Guard, Requirement},
    },
    model::{application::ApplicationDto, user::Role},
};

#[component]
pub fn MyApplications() -> Element {
    rsx!(
        Title { "Applications | JobZee" }
        Guard { requirement: Requirement::AnyRole,
            ApplicationList {}
        }
    )
}

#[component]
fn ApplicationList() -> Element {
    let session = use_session();
    let notifier = use_notifier();
    let mut applications = use_signal(Vec::<ApplicationDto>::new);
    let mut loaded = use_signal(|| false);
    let mut resume_url = use_signal(|| None::<String>);

    let role = session.read().role();

    use_future(move || async move {
        let Some(role) = role else {
            loaded.set(true);
            return;
        };

        match api::application::get_applications(role).await {
            Ok(list) => applications.set(list),
            Err(err) => {
                tracing::error!("Failed to fetch applications: {}", err);
                notifier.error(err.user_message());
            }
        }
        loaded.set(true);
    });

    let delete = use_callback(move |id: String| {
        spawn(async move {
            match api::application::delete_application(&id).await {
                Ok(response) => {
                    notifier.success(response.message);
                    applications.write().retain(|application| application.id != id);
                }
                Err(err) => {
                    tracing::error!("Failed to delete application {}: {}", id, err);
                    notifier.error(err.user_message());
                }
            }
        });
    });

    let heading = match role {
        Some(Role::Employer) => "Applications From Job Seekers",
        Some(Role::JobSeeker) => "My Applications",
        None => "Invalid Role",
    };
    let list = applications.read().clone();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl font-semibold", "{heading}" }
                if !loaded() {
                    p { "Loading applications..." }
                } else if list.is_empty() {
                    h4 { "No Applications Found" }
                } else {
                    for application in list {
                        ApplicationCard {
                            key: "{application.id}",
                            application: application.clone(),
                            on_open_resume: move |url| resume_url.set(Some(url)),
                            on_delete: if role == Some(Role::JobSeeker) {
                                Some(delete)
                            } else {
                                None
                            },
                        }
                    }
                }
            }
            if let Some(url) = resume_url() {
                ResumeModal {
                    url: url,
                    on_close: move |_| resume_url.set(None),
                }
            }
        }
    )
}
