use {
    crate::{
        app::{AppShell, Route},
        outside_click::PointerHub,
        session::Session,
    },
    dioxus::prelude::*,
    dioxus_history::{History, MemoryHistory},
    std::rc::Rc,
};

/// Renders the whole app as it looks when first opened at `path`.
pub fn render_route(path: &str, session: Session) -> String {
    let mut dom = VirtualDom::new_with_props(
        PinnedShell,
        PinnedShellProps {
            path: path.to_string(),
            session,
            hub: PointerHub::default(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Pins the router's history to a fixed path, then mounts the shell.
#[component]
fn PinnedShell(path: String, session: Session, hub: PointerHub) -> Element {
    use_hook(|| {
        let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path.clone()));
        provide_context(history)
    });

    rsx! {
        AppShell { session, hub }
    }
}

pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Root {} => "Social",
        Route::Home {} => "Home",
        Route::Profile {} => "Profile",
        Route::Login {} => "Login",
        Route::SignUp {} => "Sign Up",
        Route::NotFound { .. } => "404",
    }
}

/// Wraps rendered markup in a full HTML document.
pub fn html_app(body: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="/assets/styling/main.css">
    <link rel="stylesheet" href="/assets/styling/navbar.css">
    <title>{}</title>
</head>
<body>
{}
</body>
</html>"#,
        title, body
    )
}
