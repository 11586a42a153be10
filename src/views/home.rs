use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { id: "home", class: "page",
            h1 { "Home" }
        }
    }
}

/// Application root. People and Chat tabs land here until they get pages.
#[component]
pub fn Root() -> Element {
    rsx! {
        main { id: "root", class: "page",
            h1 { "Welcome" }
        }
    }
}
