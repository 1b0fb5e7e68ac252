use dioxus::prelude::*;

use crate::client::{
    components::{Footer, Navbar, Toaster},
    router::Route,
    store::session::use_session,
};

/// Shell around every route; navigation chrome is only shown to logged in users
#[component]
pub fn AppLayout() -> Element {
    let session = use_session();
    let is_authorized = session.read().is_authorized;

    rsx! {
        if is_authorized {
            Navbar {}
        }
        main { class: "flex flex-col min-h-screen",
            Outlet::<Route> {}
        }
        if is_authorized {
            Footer {}
        }
        Toaster {}
    }
}
