use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api,
    components::{BrandButton, Page},
    form::auth::LoginForm,
    router::Route,
    routes::auth::RoleSelect,
    store::{session::use_session, toast::use_notifier},
    util::access::{Guard, Requirement},
};

#[component]
pub fn Login() -> Element {
    rsx!(
        Title { "Login | JobZee" }
        Guard { requirement: Requirement::Guest,
            LoginCard {}
        }
    )
}

#[component]
fn LoginCard() -> Element {
    let mut form = use_signal(LoginForm::default);
    let mut session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let validated = form.read().validate();
        let body = match validated {
            Ok(body) => body,
            Err(err) => {
                notifier.error(err.to_string());
                return;
            }
        };

        spawn(async move {
            match api::user::login(&body).await {
                Ok(response) => {
                    notifier.success(response.message);
                    form.set(LoginForm::default());
                    session.write().login(response.user);
                    navigator.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("Failed to login: {}", err);
                    notifier.error(err.user_message());
                }
            }
        });
    };

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-md",
                div { class: "card-body",
                    div { class: "flex flex-col items-center gap-2",
                        BrandButton {}
                        h3 { class: "text-lg", "Login to your account" }
                    }
                    form { class: "flex flex-col gap-4", onsubmit: submit,
                        RoleSelect {
                            value: form.read().role.clone(),
                            on_change: move |role| form.write().role = role,
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Email Address" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                placeholder: "xyz@gmail.com",
                                value: "{form.read().email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Password" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                placeholder: "Your Password",
                                value: "{form.read().password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Login" }
                        Link { to: Route::Register {}, class: "link text-center", "Register Now" }
                    }
                }
            }
        }
    )
}
