use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    rsx! {
        main { id: "profile", class: "page",
            h1 { "Profile" }
        }
    }
}
