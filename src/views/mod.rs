//! Page bodies for each [`Route`](crate::app::Route). They render below the
//! [`NavBar`](crate::components::NavBar) layout's outlet.

mod home;
pub use home::{Home, Root};

mod profile;
pub use profile::Profile;

mod auth;
pub use auth::{Login, SignUp};

mod not_found;
pub use not_found::NotFound;
