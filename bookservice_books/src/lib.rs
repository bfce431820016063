pub mod api;
pub mod links;

#[cfg(any(feature = "client", test))]
pub mod client;

#[cfg(any(feature = "server", test))]
pub mod app_config;
#[cfg(any(feature = "server", test))]
pub mod book_store;
#[cfg(any(feature = "server", test))]
mod handlers;
