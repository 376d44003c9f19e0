pub mod api_types;
pub mod auth;
pub mod config;
pub mod delete_service;
pub mod http_server;

pub use api_types::*;
pub use auth::*;
pub use config::*;
pub use delete_service::*;
pub use http_server::*;
