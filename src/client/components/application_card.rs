use dioxus::prelude::*;

use crate::model::application::ApplicationDto;

/// One application with its resume thumbnail
///
/// `on_delete` is only passed for the applicant's own view; employers cannot delete.
#[component]
pub fn ApplicationCard(
    application: ApplicationDto,
    on_open_resume: EventHandler<String>,
    on_delete: Option<EventHandler<String>>,
) -> Element {
    let resume_url = application.resume.url.clone();
    let application_id = application.id.clone();

    rsx!(
        div { class: "card bg-base-100 shadow-sm w-full",
            div { class: "card-body flex flex-col md:flex-row gap-4",
                div { class: "flex-1 flex flex-col gap-1",
                    p { span { class: "font-bold", "Name: " } "{application.name}" }
                    p { span { class: "font-bold", "Email: " } "{application.email}" }
                    p { span { class: "font-bold", "Phone: " } "{application.phone}" }
                    p { span { class: "font-bold", "Address: " } "{application.address}" }
                    p { span { class: "font-bold", "Cover Letter: " } "{application.cover_letter}" }
                }
                div { class: "w-48",
                    img {
                        class: "cursor-pointer rounded",
                        src: "{application.resume.url}",
                        alt: "resume",
                        onclick: move |_| on_open_resume.call(resume_url.clone()),
                    }
                }
                if let Some(on_delete) = on_delete {
                    div { class: "card-actions items-center",
                        button {
                            class: "btn btn-error btn-outline",
                            onclick: move |_| on_delete.call(application_id.clone()),
                            "Delete Application"
                        }
                    }
                }
            }
        }
    )
}
