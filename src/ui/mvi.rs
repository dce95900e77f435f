//! Unidirectional state for dialogs.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! A reducer never talks to the worker. Submitting a form only moves it into
//! its submitting state; the [`App`](crate::ui::app::App) sends the command and
//! later feeds the settled result back in as another intent.

/// Something the operator did, or a settled request.
pub trait Intent: Send + 'static {}

/// Everything a dialog needs to draw itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
