use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Action { text: String, href: String },
    Divider,
}

impl MenuEntry {
    pub fn action(text: impl Into<String>, href: impl Into<String>) -> Self {
        MenuEntry::Action {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// Entries shared by both navbar menus until real actions are wired up.
pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::action("Action", "#action/3.1"),
        MenuEntry::action("Another action", "#action/3.2"),
        MenuEntry::action("Something", "#action/3.3"),
        MenuEntry::Divider,
        MenuEntry::action("Separated link", "#action/3.4"),
    ]
}

/// A dropdown anchored to `label`. Opening and closing is left to the native
/// `details` disclosure, so the component holds no state of its own.
#[component]
pub fn ActionMenu(
    label: Element,
    items: Vec<MenuEntry>,
    #[props(default, into)] kind: String,
) -> Element {
    rsx! {
        details {
            class: "nav-dropdown px-1 no-dropdown-arrow",
            "data-menu": kind,
            summary { class: "dropdown-toggle", {label} }
            ul { class: "dropdown-menu dropdown-menu-dark",
                for entry in items {
                    {match entry {
                        MenuEntry::Action { text, href } => rsx! {
                            li { a { class: "dropdown-item", href, {text} } }
                        },
                        MenuEntry::Divider => rsx! {
                            li { class: "dropdown-divider", role: "separator" }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
pub fn NotificationDropdown(icon: Element) -> Element {
    rsx! {
        ActionMenu { label: icon, items: default_entries(), kind: "notifications" }
    }
}

#[component]
pub fn UserDropdown(icon: Element) -> Element {
    rsx! {
        ActionMenu { label: icon, items: default_entries(), kind: "user" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Icon, IconGlyph};

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn notification_dropdown_has_four_actions_and_a_divider() {
        let html = dioxus_ssr::render_element(rsx! {
            NotificationDropdown { icon: rsx! { IconGlyph { icon: Icon::Notification } } }
        });
        assert_eq!(count(&html, "class=\"dropdown-item\""), 4);
        assert_eq!(count(&html, "class=\"dropdown-divider\""), 1);
        assert!(html.contains("data-menu=\"notifications\""));
        assert!(html.contains("icon-notification"));
    }

    #[test]
    fn user_dropdown_ignores_which_icon_it_gets() {
        for icon in [Icon::People, Icon::Chat] {
            let html = dioxus_ssr::render_element(rsx! {
                UserDropdown { icon: rsx! { IconGlyph { icon } } }
            });
            assert_eq!(count(&html, "class=\"dropdown-item\""), 4);
            assert_eq!(count(&html, "class=\"dropdown-divider\""), 1);
            assert!(html.contains("data-menu=\"user\""));
        }
    }

    #[test]
    fn entries_keep_their_order_and_targets() {
        let html = dioxus_ssr::render_element(rsx! {
            ActionMenu {
                label: rsx! { "menu" },
                items: default_entries(),
            }
        });
        let first = html.find("#action/3.1").unwrap();
        let divider = html.find("dropdown-divider").unwrap();
        let last = html.find("#action/3.4").unwrap();
        assert!(first < divider && divider < last);
        assert!(html.contains(">Separated link<"));
    }

    #[test]
    fn custom_entries_render_as_given() {
        let html = dioxus_ssr::render_element(rsx! {
            ActionMenu {
                label: rsx! { "me" },
                items: vec![MenuEntry::action("Settings", "/settings")],
            }
        });
        assert_eq!(count(&html, "class=\"dropdown-item\""), 1);
        assert!(html.contains("href=\"/settings\""));
        assert_eq!(count(&html, "dropdown-divider"), 0);
    }
}
