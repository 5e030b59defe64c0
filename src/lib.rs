pub mod api;
pub mod config;
pub mod contact;
pub mod core;
pub mod error;
pub mod routes;
