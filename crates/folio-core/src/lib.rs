//! Core types and trait definitions for the Folio portfolio platform.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod about;
pub mod context;
pub mod course;
pub mod entity;
pub mod error;
pub mod experience;
pub mod fallback;
pub mod mentorship;
pub mod message;
pub mod portfolio;
pub mod project;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use portfolio::{AsyncState, PortfolioData};
