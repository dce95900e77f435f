//! Checks run before any request leaves the client.

pub mod files;
pub mod forms;

pub use files::{FileValidationError, UploadCandidate, UploadKind};
pub use forms::{
    validate_product, FormError, PriceForm, ProductForm, ReferralForm, RefundForm, SchemeForm,
};
