// Services module
// Catalog, clock, deal evaluation, and persistence

pub mod catalog;
pub mod clock;
pub mod database;
pub mod deals;
pub mod favorites;
