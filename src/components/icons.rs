use dioxus::prelude::*;

/// Glyphs used by the navbar. Rendered as inline SVG so they inherit the
/// surrounding text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    House,
    Houses,
    Search,
    People,
    Chat,
    Notification,
    Logo,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::House => "house",
            Icon::Houses => "houses",
            Icon::Search => "search",
            Icon::People => "people",
            Icon::Chat => "chat",
            Icon::Notification => "notification",
            Icon::Logo => "logo",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Icon::House => "M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z",
            Icon::Houses => "M1 11 7 6l6 5v9H1zm10-3 6-5 6 5v12h-8",
            Icon::Search => "M10 3a7 7 0 1 1 0 14 7 7 0 0 1 0-14zm5 12 6 6",
            Icon::People => "M8 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zm8 0a3 3 0 1 0 0-6M1 21c0-4 3-7 7-7s7 3 7 7m2-7c3 0 6 2 6 6",
            Icon::Chat => "M3 5h18v11H8l-5 4z",
            Icon::Notification => "M12 3a6 6 0 0 0-6 6v5l-2 3h16l-2-3V9a6 6 0 0 0-6-6zm-2 17a2 2 0 0 0 4 0",
            Icon::Logo => "M12 2 2 7v10l10 5 10-5V7zm0 5a5 5 0 1 1 0 10 5 5 0 0 1 0-10z",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    let size = if icon == Icon::Logo { "36" } else { "24" };
    let class = format!("icon icon-{}", icon.name());
    rsx! {
        svg {
            class,
            width: size,
            height: size,
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: icon.path() }
        }
    }
}
