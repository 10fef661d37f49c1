pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod data_models;
pub mod filter;
pub mod navigator;
pub mod render;

pub use api::{ApiError, HttpListingsApi, ListingsApi};
pub use controller::{FetchOutcome, SearchController};
pub use data_models::{Listing, ListingId};
pub use filter::{FilterError, FilterState};
pub use navigator::{HistoryNavigator, Navigator, Route};
