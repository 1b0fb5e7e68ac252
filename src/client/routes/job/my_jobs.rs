use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::Page,
        routes::job::CategorySelect,
        store::toast::use_notifier,
        util::access::{Guard, Requirement},
    },
    model::job::{JobDto, JobField, Salary},
};

#[component]
pub fn MyJobs() -> Element {
    rsx!(
        Title { "Your Jobs | JobZee" }
        Guard { requirement: Requirement::Employer,
            MyJobList {}
        }
    )
}

#[component]
fn MyJobList() -> Element {
    let mut jobs = use_signal(Vec::<JobDto>::new);
    let mut loaded = use_signal(|| false);
    // Id of the job currently in edit mode; only one job is editable at a time
    let editing = use_signal(|| None::<String>);
    let notifier = use_notifier();

    use_future(move || async move {
        match api::job::get_my_jobs().await {
            Ok(my_jobs) => jobs.set(my_jobs),
            Err(err) => {
                tracing::error!("Failed to fetch posted jobs: {}", err);
                notifier.error(err.user_message());
                jobs.set(Vec::new());
            }
        }
        loaded.set(true);
    });

    let job_list = jobs.read().clone();

    rsx!(
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl font-semibold", "Your Posted Jobs" }
                if !loaded() {
                    p { "Loading jobs..." }
                } else if job_list.is_empty() {
                    p { "You've not posted any jobs or maybe you deleted all of your jobs!" }
                } else {
                    for job in job_list {
                        JobEditor {
                            key: "{job.id}",
                            job: job.clone(),
                            jobs: jobs,
                            editing: editing,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn JobEditor(
    job: JobDto,
    mut jobs: Signal<Vec<JobDto>>,
    mut editing: Signal<Option<String>>,
) -> Element {
    let notifier = use_notifier();
    let job_id = job.id.clone();
    let is_editing = editing.read().as_deref() == Some(job.id.as_str());
    let disabled = !is_editing;

    let update_field = use_callback({
        let job_id = job_id.clone();
        move |(field, value): (JobField, String)| {
            if let Some(job) = jobs.write().iter_mut().find(|job| job.id == job_id) {
                job.set_field(field, &value);
            }
        }
    });

    let edit = {
        let job_id = job_id.clone();
        move |_| editing.set(Some(job_id.clone()))
    };

    let save = {
        let job_id = job_id.clone();
        move |_| {
            let edited = jobs.read().iter().find(|job| job.id == job_id).cloned();
            let Some(edited) = edited else {
                notifier.error("Job not found!");
                return;
            };

            spawn(async move {
                match api::job::update_job(&edited).await {
                    Ok(response) => {
                        notifier.success(response.message);
                        editing.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update job {}: {}", edited.id, err);
                        notifier.error(err.user_message());
                    }
                }
            });
        }
    };

    let delete = move |_| {
        let job_id = job_id.clone();
        spawn(async move {
            match api::job::delete_job(&job_id).await {
                Ok(response) => {
                    notifier.success(response.message);
                    jobs.write().retain(|job| job.id != job_id);
                    if editing.read().as_deref() == Some(job_id.as_str()) {
                        editing.set(None);
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to delete job {}: {}", job_id, err);
                    notifier.error(err.user_message());
                }
            }
        });
    };

    let amount = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body flex flex-col gap-4",
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    EditField {
                        label: "Title",
                        value: job.title.clone(),
                        disabled: disabled,
                        on_input: move |value| update_field.call((JobField::Title, value)),
                    }
                    EditField {
                        label: "Country",
                        value: job.country.clone(),
                        disabled: disabled,
                        on_input: move |value| update_field.call((JobField::Country, value)),
                    }
                    EditField {
                        label: "City",
                        value: job.city.clone(),
                        disabled: disabled,
                        on_input: move |value| update_field.call((JobField::City, value)),
                    }
                    EditField {
                        label: "Location",
                        value: job.location.clone(),
                        disabled: disabled,
                        on_input: move |value| update_field.call((JobField::Location, value)),
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Category:" }
                        CategorySelect {
                            value: job.category.clone(),
                            disabled: disabled,
                            on_change: move |value| update_field.call((JobField::Category, value)),
                        }
                    }
                    {match job.salary() {
                        Salary::Fixed(fixed) => rsx!(
                            EditField {
                                label: "Salary",
                                value: fixed.to_string(),
                                disabled: disabled,
                                numeric: true,
                                on_input: move |value| update_field.call((JobField::FixedSalary, value)),
                            }
                        ),
                        Salary::Range { from, to } => rsx!(
                            div { class: "flex gap-2",
                                EditField {
                                    label: "Salary From",
                                    value: amount(from),
                                    disabled: disabled,
                                    numeric: true,
                                    on_input: move |value| update_field.call((JobField::SalaryFrom, value)),
                                }
                                EditField {
                                    label: "Salary To",
                                    value: amount(to),
                                    disabled: disabled,
                                    numeric: true,
                                    on_input: move |value| update_field.call((JobField::SalaryTo, value)),
                                }
                            }
                        ),
                    }}
                }
                label { class: "form-control w-full",
                    span { class: "label-text", "Description:" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: "5",
                        disabled: disabled,
                        value: "{job.description}",
                        oninput: move |evt| update_field.call((JobField::Description, evt.value())),
                    }
                }
                div { class: "card-actions justify-between",
                    div { class: "flex gap-2",
                        if is_editing {
                            button {
                                class: "btn btn-success btn-square",
                                onclick: save,
                                Icon { width: 18, height: 18, icon: FaCheck }
                            }
                            button {
                                class: "btn btn-ghost btn-square",
                                onclick: move |_| editing.set(None),
                                Icon { width: 18, height: 18, icon: FaXmark }
                            }
                        } else {
                            button { class: "btn btn-outline", onclick: edit, "Edit" }
                        }
                    }
                    button { class: "btn btn-error", onclick: delete, "Delete" }
                }
            }
        }
    )
}

#[component]
fn EditField(
    label: &'static str,
    value: String,
    disabled: bool,
    #[props(default)] numeric: bool,
    on_input: EventHandler<String>,
) -> Element {
    let input_type = if numeric { "number" } else { "text" };

    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text", "{label}:" }
            input {
                class: "input input-bordered w-full",
                r#type: input_type,
                disabled: disabled,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}
