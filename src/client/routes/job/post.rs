use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api,
    components::Page,
    form::job::{JobForm, SalaryType},
    routes::job::CategorySelect,
    store::toast::use_notifier,
    util::access::{Guard, Requirement},
};

#[component]
pub fn PostJob() -> Element {
    rsx!(
        Title { "Post a Job | JobZee" }
        Guard { requirement: Requirement::Employer,
            PostJobForm {}
        }
    )
}

#[component]
fn PostJobForm() -> Element {
    let mut form = use_signal(JobForm::default);
    let notifier = use_notifier();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let validated = form.read().validate();
        let job = match validated {
            Ok(job) => job,
            Err(err) => {
                notifier.error(err.to_string());
                return;
            }
        };

        spawn(async move {
            match api::job::post_job(&job).await {
                Ok(response) => {
                    notifier.success(response.message);
                    form.set(JobForm::default());
                }
                Err(err) => {
                    tracing::error!("Failed to post job: {}", err);
                    notifier.error(err.user_message());
                }
            }
        });
    };

    let salary_type = form.read().salary_type();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-3xl",
                div { class: "card-body",
                    h3 { class: "card-title", "Post a New Job" }
                    form { class: "flex flex-col gap-4", onsubmit: submit,
                        div { class: "flex flex-col md:flex-row gap-4",
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "Job Title *",
                                value: "{form.read().title}",
                                oninput: move |evt| form.write().title = evt.value(),
                            }
                            CategorySelect {
                                value: form.read().category.clone(),
                                disabled: false,
                                on_change: move |category| form.write().category = category,
                            }
                        }
                        div { class: "flex flex-col md:flex-row gap-4",
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "Country *",
                                value: "{form.read().country}",
                                oninput: move |evt| form.write().country = evt.value(),
                            }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "City *",
                                value: "{form.read().city}",
                                oninput: move |evt| form.write().city = evt.value(),
                            }
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "text",
                            placeholder: "Location *",
                            value: "{form.read().location}",
                            oninput: move |evt| form.write().location = evt.value(),
                        }
                        div { class: "flex flex-col md:flex-row gap-4",
                            select {
                                class: "select select-bordered w-full md:w-64",
                                value: "{form.read().salary_type}",
                                onchange: move |evt| form.write().salary_type = evt.value(),
                                option { value: "", selected: salary_type.is_none(), "Select Salary Type *" }
                                for kind in SalaryType::ALL {
                                    option { key: "{kind.as_str()}", value: "{kind.as_str()}", "{kind.as_str()}" }
                                }
                            }
                            {match salary_type {
                                Some(SalaryType::Fixed) => rsx!(
                                    input {
                                        class: "input input-bordered w-full",
                                        r#type: "number",
                                        min: "0",
                                        placeholder: "Enter Fixed Salary *",
                                        value: "{form.read().fixed_salary}",
                                        oninput: move |evt| form.write().fixed_salary = evt.value(),
                                    }
                                ),
                                Some(SalaryType::Ranged) => rsx!(
                                    div { class: "flex gap-4 w-full",
                                        input {
                                            class: "input input-bordered w-full",
                                            r#type: "number",
                                            min: "0",
                                            placeholder: "Salary From *",
                                            value: "{form.read().salary_from}",
                                            oninput: move |evt| form.write().salary_from = evt.value(),
                                        }
                                        input {
                                            class: "input input-bordered w-full",
                                            r#type: "number",
                                            min: "0",
                                            placeholder: "Salary To *",
                                            value: "{form.read().salary_to}",
                                            oninput: move |evt| form.write().salary_to = evt.value(),
                                        }
                                    }
                                ),
                                None => rsx!(
                                    p { class: "self-center", "Please select a salary type *" }
                                ),
                            }}
                        }
                        textarea {
                            class: "textarea textarea-bordered w-full",
                            rows: "10",
                            placeholder: "Job Description *",
                            value: "{form.read().description}",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Post Job" }
                    }
                }
            }
        }
    )
}
