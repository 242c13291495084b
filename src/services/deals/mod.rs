// Deal activity service
// Decides whether deals are running at a given moment

use crate::models::deal::Deal;
use crate::models::venue::Venue;
use crate::services::clock::Moment;
use crate::utils::time::is_time_in_range;

/// Whether a deal is running at the given moment: the day must be in
/// the deal's active-day set and the time inside its window.
pub fn is_deal_active(deal: &Deal, moment: &Moment) -> bool {
    deal.days_active.contains(&moment.day) && is_time_in_range(&moment.time, &deal.time_range)
}

/// Whether a venue has at least one deal running at the given moment
pub fn has_active_deal(venue: &Venue, moment: &Moment) -> bool {
    venue.deals.iter().any(|deal| is_deal_active(deal, moment))
}
