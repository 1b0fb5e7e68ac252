use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api,
    components::Page,
    form::application::{check_resume, ApplicationForm, RESUME_INPUT_ID},
    router::Route,
    store::toast::use_notifier,
    util::{
        access::{Guard, Requirement},
        file::{clear_selected_file, selected_file_info},
    },
};

/// Application form for the job with id `id`
#[component]
pub fn Apply(id: String) -> Element {
    rsx!(
        Title { "Apply | JobZee" }
        Guard { requirement: Requirement::JobSeeker,
            ApplicationFormCard { job_id: id.clone() }
        }
    )
}

#[component]
fn ApplicationFormCard(job_id: String) -> Element {
    let mut form = use_signal(ApplicationForm::default);
    let notifier = use_notifier();
    let navigator = use_navigator();

    let resume_changed = move |_| {
        let Some(resume) = selected_file_info(RESUME_INPUT_ID) else {
            return;
        };
        if let Err(err) = check_resume(&resume) {
            tracing::debug!("Rejected resume {}: {}", resume.name, err);
            notifier.error(err.to_string());
            clear_selected_file(RESUME_INPUT_ID);
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let fields = form.read().clone();
        if let Err(err) = fields.validate(selected_file_info(RESUME_INPUT_ID).as_ref()) {
            notifier.error(err.to_string());
            return;
        }

        let job_id = job_id.clone();
        spawn(async move {
            match api::application::post_application(&fields, &job_id, RESUME_INPUT_ID).await {
                Ok(response) => {
                    form.set(ApplicationForm::default());
                    clear_selected_file(RESUME_INPUT_ID);
                    notifier.success(response.message);
                    navigator.push(Route::Jobs {});
                }
                Err(err) => {
                    tracing::error!("Failed to submit application for job {}: {}", job_id, err);
                    notifier.error(err.user_message());
                }
            }
        });
    };

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-2xl",
                div { class: "card-body",
                    h3 { class: "card-title", "Application Form" }
                    form { class: "flex flex-col gap-4", onsubmit: submit,
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Your Name",
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            placeholder: "Your Email",
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "tel",
                            placeholder: "Your Phone Number",
                            value: "{form.read().phone}",
                            oninput: move |evt| form.write().phone = evt.value(),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Your Address",
                            value: "{form.read().address}",
                            oninput: move |evt| form.write().address = evt.value(),
                        }
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: "6",
                            placeholder: "Cover Letter...",
                            value: "{form.read().cover_letter}",
                            oninput: move |evt| form.write().cover_letter = evt.value(),
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Select Resume" }
                            input {
                                id: RESUME_INPUT_ID,
                                class: "file-input file-input-bordered w-full",
                                r#type: "file",
                                accept: ".pdf,.jpg,.jpeg,.png",
                                onchange: resume_changed,
                            }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Send Application" }
                    }
                }
            }
        }
    )
}
