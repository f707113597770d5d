// ABOUTME: Command module aggregator for the imgrm CLI.
// ABOUTME: Re-exports the remove command handler.

mod remove;
mod runtime_connection;

pub use remove::remove;
