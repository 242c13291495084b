// Filter module
// Transient UI filter state; never persisted

use crate::models::deal::DealType;
use crate::models::venue::PriceLevel;

/// The user's current filter selections. Transient UI state only;
/// unlike favorites, it is never persisted.
///
/// An empty selection on any dimension means "no constraint on that
/// dimension", not "match nothing".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub deal_types: Vec<DealType>,
    pub price_levels: Vec<PriceLevel>,
    pub active_now: bool,
    pub search_query: String,
}

impl FilterState {
    /// Number of active constraints, shown as a badge on the filter button.
    /// The search query is not counted; it has its own input field.
    pub fn active_filter_count(&self) -> usize {
        self.deal_types.len() + self.price_levels.len() + usize::from(self.active_now)
    }

    /// Whether any panel filter is set (search query excluded)
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Reset panel filters, keeping the search query as typed
    pub fn clear(&mut self) {
        self.deal_types.clear();
        self.price_levels.clear();
        self.active_now = false;
    }

    /// Add or remove a deal type from the selection
    pub fn toggle_deal_type(&mut self, deal_type: DealType) {
        if let Some(pos) = self.deal_types.iter().position(|t| *t == deal_type) {
            self.deal_types.remove(pos);
        } else {
            self.deal_types.push(deal_type);
        }
    }

    /// Add or remove a price level from the selection
    pub fn toggle_price_level(&mut self, level: PriceLevel) {
        if let Some(pos) = self.price_levels.iter().position(|l| *l == level) {
            self.price_levels.remove(pos);
        } else {
            self.price_levels.push(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_constraints() {
        let filters = FilterState::default();
        assert!(filters.deal_types.is_empty());
        assert!(filters.price_levels.is_empty());
        assert!(!filters.active_now);
        assert_eq!(filters.search_query, "");
        assert_eq!(filters.active_filter_count(), 0);
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_active_filter_count() {
        let mut filters = FilterState::default();
        filters.toggle_deal_type(DealType::Wine);
        filters.toggle_deal_type(DealType::Beer);
        filters.toggle_price_level(PriceLevel::Budget);
        filters.active_now = true;

        assert_eq!(filters.active_filter_count(), 4);
    }

    #[test]
    fn test_search_query_not_counted() {
        let filters = FilterState {
            search_query: "rooftop".to_string(),
            ..FilterState::default()
        };

        assert_eq!(filters.active_filter_count(), 0);
    }

    #[test]
    fn test_clear_keeps_search_query() {
        let mut filters = FilterState {
            deal_types: vec![DealType::Wine],
            price_levels: vec![PriceLevel::Upscale],
            active_now: true,
            search_query: "wine".to_string(),
        };

        filters.clear();

        assert!(!filters.has_active_filters());
        assert_eq!(filters.search_query, "wine");
    }

    #[test]
    fn test_toggle_deal_type_round_trip() {
        let mut filters = FilterState::default();
        filters.toggle_deal_type(DealType::Food);
        assert_eq!(filters.deal_types, vec![DealType::Food]);

        filters.toggle_deal_type(DealType::Food);
        assert!(filters.deal_types.is_empty());
    }

    #[test]
    fn test_toggle_price_level_round_trip() {
        let mut filters = FilterState::default();
        filters.toggle_price_level(PriceLevel::Moderate);
        filters.toggle_price_level(PriceLevel::Budget);
        assert_eq!(filters.price_levels.len(), 2);

        filters.toggle_price_level(PriceLevel::Moderate);
        assert_eq!(filters.price_levels, vec![PriceLevel::Budget]);
    }
}
