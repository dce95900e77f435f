//! Form dialogs: `Closed → Open → Submitting → Closed`, or back to `Open`
//! with an error.

mod intent;
mod reducer;
mod state;
mod submit;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{
    product_fields, referral_fields, scheme_fields, FieldInput, FormDialogState, FormField,
    FormKind, METALS,
};
pub use submit::{to_mutation, to_submission, Submission};
pub use view::{render_dialog, render_inline};
