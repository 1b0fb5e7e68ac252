use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api,
    router::Route,
    store::{session::SessionState, toast::Toasts},
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut session = use_store(SessionState::default);
    let toasts = use_store(Toasts::default);
    use_context_provider(|| session);
    use_context_provider(|| toasts);

    // Resolve identity once per page load
    use_future(move || async move {
        let result = api::user::get_user().await;
        if let Err(err) = &result {
            if !err.is_unauthorized() {
                tracing::error!("Failed to resolve session: {}", err);
            }
        }

        session.write().resolve(result);
    });

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "JobZee" }
        Router::<Route> {}
    }
}
