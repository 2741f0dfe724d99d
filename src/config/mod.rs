//! Configuration module for linkification
//!
//! This module provides the `LinkifyOptions` struct and its builder for
//! configuring rewrite passes with validation and sensible defaults.

pub mod builder;
pub mod types;

pub use builder::LinkifyOptionsBuilder;
pub use types::{LinkCallback, LinkifyOptions, MatchOrder};
