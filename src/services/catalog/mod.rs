// Catalog service module
// Static venue catalog plus filtering and summary stats

mod data;
mod filter;
mod stats;

pub use data::venues;
pub use filter::filter_venues;
pub use stats::CatalogStats;
