//! board — sign-in gated listing of users and products (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod console;
pub mod constants;
pub mod env;
pub mod loader;
pub mod models;
pub mod output;
pub mod page;
pub mod session;
pub mod view;
