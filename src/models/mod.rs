// Data models module
// Exports all model types

pub mod deal;
pub mod filter;
pub mod venue;
