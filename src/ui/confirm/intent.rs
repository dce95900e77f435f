use crate::ui::mvi::Intent;
use crate::worker::Mutation;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    Ask {
        title: String,
        message: String,
        action: Mutation,
    },
    Cancel,
    Confirm,
}

impl Intent for ConfirmIntent {}
