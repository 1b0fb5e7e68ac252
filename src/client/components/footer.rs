use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
use dioxus_free_icons::Icon;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer {
            class: "footer footer-center bg-base-200 p-4 flex justify-between",
            p { "© All Rights Reserved By JobZee." }
            ul { class: "flex gap-4",
                li {
                    a { href: "https://github.com", target: "_blank",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaGithub
                        }
                    }
                }
                li {
                    a { href: "https://www.linkedin.com", target: "_blank",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaLinkedin
                        }
                    }
                }
            }
        }
    )
}
