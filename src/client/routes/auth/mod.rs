pub mod login;
pub mod register;

pub use login::Login;
pub use register::Register;

use dioxus::prelude::*;

use crate::model::user::Role;

/// Role select shared by the login and register forms
#[component]
fn RoleSelect(value: String, on_change: EventHandler<String>) -> Element {
    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text", "Login As" }
            select {
                class: "select select-bordered w-full",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select Role" }
                for role in Role::ALL {
                    option { key: "{role}", value: "{role}", "{role}" }
                }
            }
        }
    )
}
