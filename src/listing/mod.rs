pub mod actions;
pub mod controller;
pub mod filter;
pub mod query;
pub mod screens;

pub use controller::{empty_list_message, ListController};
pub use filter::ClaimFilter;
pub use query::{derive_list_query, CardListQuery, CARDS_PER_PAGE};
