/// What the center region of the navbar is showing. The tab row and the search
/// input are never rendered together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterView {
    #[default]
    Tabs,
    Search,
}

impl CenterView {
    /// The search tab was clicked.
    pub fn on_search_activated(self) -> Self {
        CenterView::Search
    }

    /// A pointer went down somewhere in the document.
    pub fn on_pointer_down(self, inside_search: bool) -> Self {
        match self {
            CenterView::Search if inside_search => CenterView::Search,
            _ => CenterView::Tabs,
        }
    }

    pub fn search_visible(self) -> bool {
        self == CenterView::Search
    }

    /// Share of the twelve-column row given to the center region.
    pub fn column_span(self) -> u8 {
        match self {
            CenterView::Tabs => 7,
            CenterView::Search => 5,
        }
    }
}
