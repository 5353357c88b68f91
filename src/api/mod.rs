pub mod client;
pub mod types;

pub use client::PlatformClient;
pub use types::{CardListPage, GiftCard, PaymentMethod};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api request failed: {0}")]
    Request(String),
    #[error("api rejected the call: {0}")]
    Response(String),
}
