use {
    crate::{
        components::NavBar,
        outside_click::PointerHub,
        session::Session,
        views::{Home, Login, NotFound, Profile, Root, SignUp},
    },
    dioxus::prelude::*,
};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// Every destination the navbar can link to. All pages render under the
/// [`NavBar`] layout, including the catch-all so unknown paths keep the chrome.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Root {},
        #[route("/home")]
        Home {},
        #[route("/profile")]
        Profile {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        SignUp {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Web entry point.
#[component]
pub fn App() -> Element {
    rsx! {
        AppShell { session: Session::simulated() }
    }
}

/// Provides the session and the document-wide pointer observer, then mounts
/// the router. Every pointer-down that reaches the shell is dispatched.
#[component]
pub fn AppShell(session: Session, #[props(default)] hub: PointerHub) -> Element {
    use_context_provider(|| session);
    let hub = use_context_provider(|| hub);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app-shell",
            onmousedown: move |_| {
                hub.dispatch();
            },
            Router::<Route> {}
        }
    }
}
