pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod scorer;
// cmd and reports belong to the binary (src/main.rs).
