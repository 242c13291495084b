// Dialog windows

pub mod venue_detail;
