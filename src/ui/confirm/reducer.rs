use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::ConfirmDialogState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Ask {
                title,
                message,
                action,
            } => ConfirmDialogState::Visible {
                title,
                message,
                action,
            },
            // The caller reads the action before confirming.
            ConfirmIntent::Cancel | ConfirmIntent::Confirm => ConfirmDialogState::Hidden,
        }
    }
}
