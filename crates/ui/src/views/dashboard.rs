use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

const FEATURES: [(&str, &str); 4] = [
    (
        "5 Question Categories",
        "Explore different aspects of your relationship.",
    ),
    (
        "Timed Conversations",
        "Adjustable timers for quick or in-depth talks.",
    ),
    (
        "Personalized Experience",
        "Customize cards with colors and styles.",
    ),
    ("Question Library", "A hundred curated questions for couples."),
];

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_effect(move || {
        if let Some(start) = ctx.take_start_view() {
            navigator.replace(start.route());
        }
    });

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header centered",
                h2 { class: "view-title", "Couple Connect" }
                p { class: "view-subtitle", "Choose an activity to strengthen your relationship" }
            }
            div { class: "option-grid",
                Link { class: "option-card", to: Route::Cards {},
                    div { class: "option-banner option-banner--pink", span { "❤️" } }
                    div { class: "option-body",
                        h3 { "Couple Cards" }
                        p {
                            "Generate conversation cards to deepen your connection with thoughtful questions across various categories."
                        }
                        div { class: "pill-row",
                            span { class: "pill pill--pink", "Romantic" }
                            span { class: "pill pill--blue", "Fun" }
                            span { class: "pill pill--purple", "Deep" }
                        }
                    }
                }
                Link { class: "option-card", to: Route::FastTalk {},
                    div { class: "option-banner option-banner--blue", span { "⏱️" } }
                    div { class: "option-body",
                        h3 { "Fast Talk" }
                        p {
                            "Quick-fire questions with a timer to spark spontaneous conversations and create memorable moments."
                        }
                        div { class: "pill-row",
                            span { class: "pill pill--green", "Timed" }
                            span { class: "pill pill--yellow", "Spontaneous" }
                            span { class: "pill pill--red", "Fun" }
                        }
                    }
                }
            }
            section { class: "features",
                h3 { "Features" }
                ul {
                    for (title, text) in FEATURES {
                        li { key: "{title}",
                            strong { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }
            div { class: "get-started",
                p { "Ready to strengthen your relationship?" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Cards {});
                    },
                    "Get Started"
                }
            }
        }
    }
}
