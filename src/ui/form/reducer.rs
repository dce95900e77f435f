use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FieldInput, FormDialogState, FormField};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormDialogState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Open { kind, fields } => FormDialogState::Open {
                kind,
                fields,
                focused: 0,
                error: None,
            },
            FormIntent::Close => match state {
                submitting @ FormDialogState::Submitting { .. } => submitting,
                _ => FormDialogState::Closed,
            },
            FormIntent::FocusNext => edit(state, |fields, focused| {
                *focused = if *focused + 1 >= fields.len() {
                    0
                } else {
                    *focused + 1
                };
            }),
            FormIntent::FocusPrev => edit(state, |fields, focused| {
                *focused = if *focused == 0 {
                    fields.len().saturating_sub(1)
                } else {
                    *focused - 1
                };
            }),
            FormIntent::Insert(ch) => edit(state, |fields, focused| {
                if let Some(field) = fields.get_mut(*focused) {
                    if field.input == FieldInput::Text {
                        field.value.push(ch);
                    } else if ch == ' ' {
                        field.cycle();
                    }
                }
            }),
            FormIntent::Backspace => edit(state, |fields, focused| {
                if let Some(field) = fields.get_mut(*focused) {
                    if field.input == FieldInput::Text {
                        field.value.pop();
                    }
                }
            }),
            FormIntent::Cycle => edit(state, |fields, focused| {
                if let Some(field) = fields.get_mut(*focused) {
                    field.cycle();
                }
            }),
            FormIntent::Rejected { message } => match state {
                FormDialogState::Open {
                    kind,
                    fields,
                    focused,
                    ..
                } => FormDialogState::Open {
                    kind,
                    fields,
                    focused,
                    error: Some(message),
                },
                other => other,
            },
            FormIntent::Submitted => match state {
                FormDialogState::Open {
                    kind,
                    fields,
                    focused,
                    ..
                } => FormDialogState::Submitting {
                    kind,
                    fields,
                    focused,
                },
                other => other,
            },
            FormIntent::Succeeded => match state {
                FormDialogState::Submitting { kind, mut fields, .. } if kind.is_inline() => {
                    clear_text(&mut fields);
                    FormDialogState::Open {
                        kind,
                        fields,
                        focused: 0,
                        error: None,
                    }
                }
                FormDialogState::Submitting { .. } => FormDialogState::Closed,
                other => other,
            },
            FormIntent::Failed { message } => match state {
                FormDialogState::Submitting {
                    kind,
                    fields,
                    focused,
                } => FormDialogState::Open {
                    kind,
                    fields,
                    focused,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}

/// Applies an edit to an open form and clears its error.
fn edit<F>(state: FormDialogState, apply: F) -> FormDialogState
where
    F: FnOnce(&mut Vec<FormField>, &mut usize),
{
    match state {
        FormDialogState::Open {
            kind,
            mut fields,
            mut focused,
            ..
        } => {
            apply(&mut fields, &mut focused);
            FormDialogState::Open {
                kind,
                fields,
                focused,
                error: None,
            }
        }
        other => other,
    }
}

fn clear_text(fields: &mut [FormField]) {
    for field in fields.iter_mut() {
        if field.input == FieldInput::Text {
            field.value.clear();
        }
    }
}
