use dioxus::prelude::*;

/// Full-size preview of an uploaded resume image
#[component]
pub fn ResumeModal(url: String, on_close: EventHandler<()>) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-4xl",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                img { class: "w-full", src: "{url}", alt: "resume" }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
    )
}
