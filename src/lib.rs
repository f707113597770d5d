// ABOUTME: Library root for imgrm - batch image removal for Docker and Podman.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod output;
pub mod remove;
pub mod runtime;
pub mod types;
