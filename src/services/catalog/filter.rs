// Catalog filtering
// Conjunction of independent predicates, then distance sort

use std::cmp::Ordering;

use crate::models::deal::DealType;
use crate::models::filter::FilterState;
use crate::models::venue::Venue;
use crate::services::clock::Moment;
use crate::services::deals::has_active_deal;

/// Apply the user's filters to the catalog and return matching venues
/// ordered by ascending distance.
///
/// Each predicate narrows independently; an empty selection on a
/// dimension leaves it unconstrained. Pure function of its inputs, so
/// it is recomputed on every state change rather than cached.
pub fn filter_venues(catalog: &[Venue], filters: &FilterState, moment: &Moment) -> Vec<Venue> {
    let mut results: Vec<Venue> = catalog.to_vec();

    if !filters.search_query.is_empty() {
        let query = filters.search_query.to_lowercase();
        results.retain(|venue| {
            venue.name.to_lowercase().contains(&query)
                || venue.neighborhood.to_lowercase().contains(&query)
                || venue
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
        });
    }

    if filters.active_now {
        results.retain(|venue| has_active_deal(venue, moment));
    }

    if !filters.deal_types.is_empty() {
        results.retain(|venue| {
            venue.deals.iter().any(|deal| {
                filters.deal_types.contains(&deal.deal_type) || deal.deal_type == DealType::All
            })
        });
    }

    if !filters.price_levels.is_empty() {
        results.retain(|venue| filters.price_levels.contains(&venue.price_level));
    }

    // Venues without a distance sort as zero, i.e. to the front
    results.sort_by(|a, b| {
        let a_dist = a.distance.unwrap_or(0.0);
        let b_dist = b.distance.unwrap_or(0.0);
        a_dist.partial_cmp(&b_dist).unwrap_or(Ordering::Equal)
    });

    results
}
