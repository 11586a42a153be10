use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        main { id: "not-found", class: "page",
            h1 { "404" }
            p { "Nothing lives at /{path}" }
        }
    }
}
