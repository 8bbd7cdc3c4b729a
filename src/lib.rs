pub mod api;
pub mod ballot;
pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod loader;
pub mod scorer;
// cmd and reports belong to the binary crate (main.rs).
