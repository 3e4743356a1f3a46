//! Terminal client for the agenda calendar service.
//!
//! The binary wires a `clap` CLI onto this library; embeddings and the
//! integration tests use `client` and `controller` directly.

pub mod client;
pub mod commands;
pub mod controller;
pub mod prompts;
pub mod render;
pub mod ui;
