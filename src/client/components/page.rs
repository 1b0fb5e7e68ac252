use dioxus::prelude::*;

use crate::client::store::session::use_session;

/// Content area of a routed view
///
/// Leaves room for the fixed navbar, which only logged in users see.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let session = use_session();
    let offset = if session.read().is_authorized {
        "pt-[80px]"
    } else {
        "pt-4"
    };
    let class = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen px-4 pb-8 {offset} {class}",
            {children}
        }
    )
}
