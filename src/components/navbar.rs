use {
    crate::{
        app::Route,
        components::{Icon, IconGlyph, NotificationDropdown, UserDropdown},
        outside_click::{PointerHub, RegionId},
        search::CenterView,
        session::use_session,
        tabs::{active_key, tabs, Tab, TabTarget},
    },
    dioxus::prelude::*,
    std::rc::Rc,
};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Layout shared by every page: the navigation chrome, then the routed page.
#[component]
pub fn NavBar() -> Element {
    let route = use_route::<Route>();
    let session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        NavBarView { path: route.to_string(), authenticated: session.authenticated }

        Outlet::<Route> {}
    }
}

fn use_pointer_hub() -> PointerHub {
    use_hook(|| try_consume_context::<PointerHub>().unwrap_or_default())
}

/// Logo on the left, tabs or search in the middle, account controls on the
/// right. Owns the tabs/search toggle and its outside-click subscription.
#[component]
pub fn NavBarView(path: String, authenticated: bool) -> Element {
    let mut view = use_signal(CenterView::default);
    let hub = use_pointer_hub();
    let search_region = use_hook(|| hub.region());

    // Held for the lifetime of this component; dropping the hook deregisters.
    use_hook(|| {
        Rc::new(hub.subscribe(move |event| {
            let current = *view.peek();
            let next = current.on_pointer_down(event.within(search_region));
            if next != current {
                tracing::debug!("pointer down outside search, restoring tabs");
                view.set(next);
            }
        }))
    });

    let current = view();
    let span = current.column_span();
    let active = active_key(&path).to_string();

    rsx! {
        nav {
            class: "row align-items-center navbar",
            "data-center": if current.search_visible() { "search" } else { "tabs" },

            div { class: "col-lg d-flex justify-content-start logo-wrapper",
                Link { to: Route::Home {}, class: "nav-link",
                    IconGlyph { icon: Icon::Logo }
                }
            }

            div { class: "col-lg-{span} d-flex justify-content-center",
                if current.search_visible() {
                    SearchInput { region: search_region }
                } else if authenticated {
                    TabRow {
                        active_key: active,
                        on_search: move |_| {
                            tracing::debug!("search opened");
                            let next = view.peek().on_search_activated();
                            view.set(next);
                        },
                    }
                }
            }

            div { class: "col-lg d-flex justify-content-end user-tab",
                if authenticated {
                    NotificationDropdown {
                        icon: rsx! { IconGlyph { icon: Icon::Notification } },
                    }
                    UserDropdown {
                        icon: rsx! { IconGlyph { icon: Icon::People } },
                    }
                } else {
                    ul { class: "nav nav-tabs navbar",
                        li { class: "nav-item",
                            Link { to: Route::Login {}, class: "nav-link", "Login" }
                        }
                        li { class: "nav-item",
                            Link { to: Route::SignUp {}, class: "nav-link", "Sign Up" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TabRow(active_key: String, on_search: EventHandler<()>) -> Element {
    let items = tabs().into_iter().map(|tab| {
        let name = tab.name;
        let active = tab.is_active(&active_key);
        rsx! {
            TabItem { key: "{name}", tab, active, on_search }
        }
    });

    rsx! {
        ul { class: "nav nav-tabs navbar", role: "tablist", {items} }
    }
}

#[component]
fn TabItem(tab: Tab, active: bool, on_search: EventHandler<()>) -> Element {
    let class = if active {
        "nav-link active"
    } else {
        "nav-link"
    };
    let unresolved = (tab.target == TabTarget::Unresolved).then_some("true");
    let glyph = rsx! { IconGlyph { icon: tab.icon } };

    rsx! {
        li {
            class: "nav-item",
            "data-tab": tab.name,
            "data-active": if active { "true" } else { "false" },
            "data-unresolved": unresolved,
            {match tab.destination() {
                Some(to) => rsx! {
                    Link { to, class, {glyph} }
                },
                None => rsx! {
                    div {
                        class,
                        role: "button",
                        style: "cursor: pointer",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_search.call(());
                        },
                        {glyph}
                    }
                },
            }}
        }
    }
}

/// Text input shown in place of the tab row. Focuses itself once mounted.
#[component]
pub fn SearchInput(region: RegionId) -> Element {
    let hub = use_pointer_hub();

    rsx! {
        input {
            r#type: "text",
            class: "form-control",
            placeholder: "Search...",
            autofocus: true,
            onmousedown: move |_| hub.enter(region),
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::warn!("could not focus search input: {e:?}");
                }
            },
        }
    }
}
