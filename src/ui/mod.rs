//! Interactive terminal console.
//!
//! State lives in [`app::App`] and changes only through key handling
//! ([`input`]) and settled worker events. Drawing ([`render`]) is a pure
//! function of that state.

pub mod app;
pub mod confirm;
pub mod events;
pub mod footer;
pub mod form;
pub mod format;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notifications;
pub mod pages;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod sidebar;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;

pub use runtime::run;
