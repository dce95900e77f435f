//! Read caching, request status and pagination.

mod cache;
mod client;
mod key;
mod pagination;
mod state;

pub use cache::QueryCache;
pub use client::QueryClient;
pub use key::QueryKey;
pub use pagination::{OffsetPager, PageIndex};
pub use state::{combined_loading, ListView, QueryStatus};
