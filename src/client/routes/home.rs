use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFileLines, FaMagnifyingGlass, FaUserPlus};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Page,
        router::Route,
        store::session::use_session,
        util::access::{Guard, Requirement},
    },
    model::job::JOB_CATEGORIES,
};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "JobZee" }
        Meta {
            name: "description",
            content: "Find a job that suits your interests and skills, or post one for job seekers."
        }
        Guard { requirement: Requirement::Authenticated,
            Page { class: "flex flex-col items-center gap-12",
                HeroSection {}
                HowItWorks {}
                PopularCategories {}
            }
        }
    )
}

#[component]
fn HeroSection() -> Element {
    let session = use_session();
    let is_employer = session.read().is_employer();

    rsx!(
        section { class: "hero bg-base-200 rounded-box py-12 w-full max-w-[1440px]",
            div { class: "hero-content text-center",
                div { class: "max-w-2xl flex flex-col gap-4",
                    h1 { class: "text-4xl font-bold",
                        "Find a job that suits your interests and skills"
                    }
                    p {
                        "Browse open positions from employers around the world, apply with your resume in a few clicks, and keep track of every application in one place."
                    }
                    div { class: "flex justify-center gap-2",
                        Link { to: Route::Jobs {}, class: "btn btn-primary", "Browse Jobs" }
                        if is_employer {
                            Link { to: Route::PostJob {}, class: "btn btn-outline", "Post a Job" }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn HowItWorks() -> Element {
    rsx!(
        section { class: "flex flex-col items-center gap-4 w-full max-w-[1440px]",
            h2 { class: "text-2xl font-semibold", "How JobZee Works" }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 w-full",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body items-center text-center",
                        Icon { width: 32, height: 32, icon: FaUserPlus }
                        h3 { class: "card-title", "Create Account" }
                        p { "Register as an employer to post jobs or as a job seeker to apply." }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body items-center text-center",
                        Icon { width: 32, height: 32, icon: FaMagnifyingGlass }
                        h3 { class: "card-title", "Find a Job / Post a Job" }
                        p { "Search all open positions or publish your own with a fixed or ranged salary." }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body items-center text-center",
                        Icon { width: 32, height: 32, icon: FaFileLines }
                        h3 { class: "card-title", "Apply / Recruit" }
                        p { "Send your resume and cover letter, or review the applications to your jobs." }
                    }
                }
            }
        }
    )
}

#[component]
fn PopularCategories() -> Element {
    rsx!(
        section { class: "flex flex-col items-center gap-4 w-full max-w-[1440px]",
            h2 { class: "text-2xl font-semibold", "Popular Categories" }
            ul { class: "flex flex-wrap justify-center gap-2",
                for category in JOB_CATEGORIES {
                    li { key: "{category}",
                        Link { to: Route::Jobs {}, class: "badge badge-lg badge-outline p-4", "{category}" }
                    }
                }
            }
        }
    )
}
