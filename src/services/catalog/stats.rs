// Catalog summary stats
// Headline numbers for the stats row above the card list

use crate::models::venue::Venue;
use crate::services::clock::Moment;
use crate::services::deals::has_active_deal;

/// Venues rated at or above this count as "top rated"
const TOP_RATED_THRESHOLD: f32 = 4.5;

/// Headline counts over a set of venues at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    /// Venues with at least one deal running right now
    pub active_venues: usize,
    /// Total deals across all venues
    pub total_deals: usize,
    /// Venues rated 4.5 or better
    pub top_rated: usize,
}

impl CatalogStats {
    pub fn compute(venues: &[Venue], moment: &Moment) -> Self {
        Self {
            active_venues: venues.iter().filter(|v| has_active_deal(v, moment)).count(),
            total_deals: venues.iter().map(|v| v.deals.len()).sum(),
            top_rated: venues
                .iter()
                .filter(|v| v.rating >= TOP_RATED_THRESHOLD)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::deal::DayOfWeek;
    use crate::services::catalog::venues;

    #[test]
    fn test_stats_monday_evening() {
        let catalog = venues().unwrap();
        let moment = Moment::new(DayOfWeek::Monday, "17:30");

        let stats = CatalogStats::compute(&catalog, &moment);

        assert_eq!(stats.active_venues, 3);
        assert_eq!(stats.total_deals, 9);
        // 4.5, 4.7, 4.6 and 4.8 make the cut
        assert_eq!(stats.top_rated, 4);
    }

    #[test]
    fn test_stats_sunday_nothing_active() {
        let catalog = venues().unwrap();
        let moment = Moment::new(DayOfWeek::Sunday, "17:30");

        let stats = CatalogStats::compute(&catalog, &moment);

        assert_eq!(stats.active_venues, 0);
        assert_eq!(stats.total_deals, 9);
    }

    #[test]
    fn test_stats_empty_catalog() {
        let moment = Moment::new(DayOfWeek::Friday, "18:00");
        let stats = CatalogStats::compute(&[], &moment);

        assert_eq!(stats.active_venues, 0);
        assert_eq!(stats.total_deals, 0);
        assert_eq!(stats.top_rated, 0);
    }
}
