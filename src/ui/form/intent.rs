use crate::ui::form::state::{FormField, FormKind};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    Open {
        kind: FormKind,
        fields: Vec<FormField>,
    },
    /// Ignored while a submission is in flight.
    Close,
    FocusNext,
    FocusPrev,
    Insert(char),
    Backspace,
    /// Toggle or cycle the focused non-text field.
    Cycle,
    /// Client-side validation failed; nothing was sent.
    Rejected { message: String },
    Submitted,
    Succeeded,
    Failed { message: String },
}

impl Intent for FormIntent {}
