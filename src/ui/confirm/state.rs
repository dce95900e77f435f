use crate::ui::mvi::UiState;
use crate::worker::Mutation;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        title: String,
        message: String,
        /// Write issued when the user confirms.
        action: Mutation,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn action(&self) -> Option<&Mutation> {
        match self {
            Self::Visible { action, .. } => Some(action),
            Self::Hidden => None,
        }
    }
}
