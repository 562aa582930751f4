use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CardsView, DashboardView, FastTalkView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/cards", CardsView)] Cards {},
        #[route("/fast-talk", FastTalkView)] FastTalk {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        nav { class: "topbar",
            h1 { "Couple Connect" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Cards {}, "Couple Cards" } }
                li { Link { to: Route::FastTalk {}, "Fast Talk" } }
            }
        }
    }
}
