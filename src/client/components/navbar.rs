use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBars;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api,
    components::BrandButton,
    router::Route,
    store::{session::use_session, toast::use_notifier},
};

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let mut show_menu = use_signal(|| false);

    let is_employer = session.read().is_employer();
    let applications_label = if is_employer {
        "APPLICANT'S APPLICATIONS"
    } else {
        "MY APPLICATIONS"
    };
    let menu_class = if show_menu() { "flex" } else { "hidden lg:flex" };

    let logout = move |_| {
        spawn(async move {
            match api::user::logout().await {
                Ok(response) => {
                    notifier.success(response.message);
                    session.write().logout();
                    navigator.push(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("Failed to logout: {}", err);
                    notifier.error(err.user_message());
                }
            }
        });
    };

    rsx! {
        nav {
            class: "navbar bg-base-200 fixed z-40 flex-wrap",
            div {
                class: "navbar-start",
                BrandButton {}
            }
            div {
                class: "navbar-end lg:hidden",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| show_menu.set(!show_menu()),
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaBars
                    }
                }
            }
            ul {
                class: "menu menu-vertical lg:menu-horizontal gap-2 w-full lg:w-auto lg:ml-auto {menu_class}",
                li {
                    Link { to: Route::Home {}, onclick: move |_| show_menu.set(false), "HOME" }
                }
                li {
                    Link { to: Route::Jobs {}, onclick: move |_| show_menu.set(false), "ALL JOBS" }
                }
                li {
                    Link { to: Route::MyApplications {}, onclick: move |_| show_menu.set(false), "{applications_label}" }
                }
                if is_employer {
                    li {
                        Link { to: Route::PostJob {}, onclick: move |_| show_menu.set(false), "POST NEW JOB" }
                    }
                    li {
                        Link { to: Route::MyJobs {}, onclick: move |_| show_menu.set(false), "VIEW YOUR JOBS" }
                    }
                }
                li {
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: logout,
                        "LOGOUT"
                    }
                }
            }
        }
    }
}
