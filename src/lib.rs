//! Operator console for the bullion platform's admin API.
//!
//! - [`api`]: typed client for `/api/admin/*` and sign-in
//! - [`query`]: keyed read cache with staleness and invalidation
//! - [`worker`]: async side of the console; runs reads and mutations
//! - [`ui`]: ratatui console
//! - [`args`]: clap surface and one-shot API commands

pub mod api;
pub mod args;
pub mod config;
pub mod logging;
pub mod models;
pub mod query;
pub mod ui;
pub mod validation;
pub mod worker;
