// Reusable UI components

pub mod filter_panel;
pub mod quick_stats;
pub mod venue_card;
