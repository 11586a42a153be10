pub mod app;
pub mod components;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
pub mod outside_click;
#[cfg(feature = "server")]
pub mod routes;
pub mod search;
pub mod session;
pub mod ssr;
pub mod tabs;
pub mod views;
