//! Game catalog data model, client-side filtering/sorting, and shared
//! browsing state.
//!
//! This crate has no I/O dependencies. Consumers fetch records through
//! `gamedex-api` and hand them to the engine and store defined here for
//! display shaping.

pub mod filter;
pub mod model;
pub mod store;
pub mod text;

pub use filter::{FilterCriteria, FilterEngine, SortKey, filter_and_sort};
pub use model::{Game, GameDetail, Genre, GenreRef, Page, PlatformAssociation, PlatformRef, Publisher};
pub use store::CatalogStore;
pub use text::strip_html_tags;
