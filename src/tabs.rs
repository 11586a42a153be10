use crate::{app::Route, components::Icon};

/// Where a tab in the primary row leads.
#[derive(Debug, Clone, PartialEq)]
pub enum TabTarget {
    Route(Route),
    /// Swaps the tab row for the search input instead of navigating.
    SearchToggle,
    /// No destination has been decided yet; links to the application root.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub name: &'static str,
    pub icon: Icon,
    pub target: TabTarget,
}

impl Tab {
    /// The key compared against [`active_key`]. Only routed tabs have one.
    pub fn key(&self) -> Option<String> {
        match &self.target {
            TabTarget::Route(route) => Some(route.to_string()),
            TabTarget::SearchToggle | TabTarget::Unresolved => None,
        }
    }

    pub fn is_active(&self, active_key: &str) -> bool {
        self.key().is_some_and(|key| key == active_key)
    }

    /// Route a click on this tab navigates to, if any.
    pub fn destination(&self) -> Option<Route> {
        match &self.target {
            TabTarget::Route(route) => Some(route.clone()),
            TabTarget::Unresolved => Some(Route::Root {}),
            TabTarget::SearchToggle => None,
        }
    }
}

/// The primary tab row, left to right.
pub fn tabs() -> [Tab; 5] {
    [
        Tab {
            name: "home",
            icon: Icon::House,
            target: TabTarget::Route(Route::Home {}),
        },
        Tab {
            name: "profile",
            icon: Icon::Houses,
            target: TabTarget::Route(Route::Profile {}),
        },
        Tab {
            name: "search",
            icon: Icon::Search,
            target: TabTarget::SearchToggle,
        },
        Tab {
            name: "people",
            icon: Icon::People,
            target: TabTarget::Unresolved,
        },
        Tab {
            name: "chat",
            icon: Icon::Chat,
            target: TabTarget::Unresolved,
        },
    ]
}

/// Key of the tab to highlight for `path`. `/home` is pinned to itself; every
/// other path is its own key and highlights nothing unless a tab shares it.
pub fn active_key(path: &str) -> &str {
    if path == "/home" {
        "/home"
    } else {
        path
    }
}
