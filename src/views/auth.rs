use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        main { id: "login", class: "page",
            h1 { "Login" }
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    rsx! {
        main { id: "signup", class: "page",
            h1 { "Sign Up" }
        }
    }
}
