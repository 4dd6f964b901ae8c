//! colorflip - translate color schemes between light and dark backgrounds
//!
//! Parses batches of hex or CSS decimal colors, translates them with a
//! perceptual model, and returns paired, plain-text and CSV views.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
