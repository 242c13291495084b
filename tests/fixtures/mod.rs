// Test fixtures - reusable test data
// Shared moments for activity checks across test files

use happyhour::models::deal::DayOfWeek;
use happyhour::services::clock::Moment;

/// Monday 17:30, inside the common 16:00-19:00 happy-hour window
pub fn monday_evening() -> Moment {
    Moment::new(DayOfWeek::Monday, "17:30")
}

/// Sunday 10:00, when nothing in the sample catalog is active
pub fn sunday_morning() -> Moment {
    Moment::new(DayOfWeek::Sunday, "10:00")
}
