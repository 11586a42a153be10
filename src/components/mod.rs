//! Building blocks of the navigation chrome. [`NavBar`] is the layout every
//! route renders under; the dropdowns and icons are its children.

mod dropdown;
pub use dropdown::{default_entries, ActionMenu, MenuEntry, NotificationDropdown, UserDropdown};

mod icons;
pub use icons::{Icon, IconGlyph};

mod navbar;
pub use navbar::{NavBar, NavBarView, SearchInput};
