//! Typed wrappers over the admin HTTP API.
//!
//! [`ApiClient`] owns the connection; each resource is reached through a
//! borrowed handle (`client.products().list(..)`).

mod analytics;
mod auth;
mod client;
mod envelope;
mod error;
mod orders;
mod payments;
mod prices;
mod products;
mod referrals;
mod schemes;
mod users;

pub use analytics::AnalyticsApi;
pub use auth::{AuthApi, FieldError, SignInError};
pub use client::{ApiClient, REQUEST_ID_HEADER};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
pub use orders::{OrderParams, OrdersApi};
pub use payments::PaymentsApi;
pub use prices::PricesApi;
pub use products::{ProductUploads, ProductsApi};
pub use referrals::ReferralsApi;
pub use schemes::SchemesApi;
pub use users::UsersApi;
