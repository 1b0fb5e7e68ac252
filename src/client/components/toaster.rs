use dioxus::prelude::*;

use crate::client::store::toast::use_toasts;

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: format!("alert {} cursor-pointer", toast.kind.class()),
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    span { "{toast.message}" }
                }
            }
        }
    )
}
