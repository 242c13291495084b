// Venue module
// Catalog entries with their attached deals

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::deal::Deal;

/// Ordinal cost tier for a venue (1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceLevel {
    Budget,
    Moderate,
    Upscale,
}

impl PriceLevel {
    /// All tiers in ascending order, for the filter panel
    pub fn all() -> [PriceLevel; 3] {
        [PriceLevel::Budget, PriceLevel::Moderate, PriceLevel::Upscale]
    }

    /// Numeric tier (1-3)
    pub fn value(&self) -> u8 {
        match self {
            PriceLevel::Budget => 1,
            PriceLevel::Moderate => 2,
            PriceLevel::Upscale => 3,
        }
    }

    /// Dollar-sign symbol ("$", "$$", "$$$")
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceLevel::Budget => "$",
            PriceLevel::Moderate => "$$",
            PriceLevel::Upscale => "$$$",
        }
    }
}

/// A bar or restaurant in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub neighborhood: String,
    pub price_level: PriceLevel,
    pub rating: f32,
    pub review_count: u32,
    pub tags: Vec<String>,
    pub deals: Vec<Deal>,
    pub image: String,
    /// Distance from the user in miles, when known
    pub distance: Option<f64>,
    pub last_updated: DateTime<Local>,
}

impl Venue {
    /// Create a builder for constructing venues with optional fields
    pub fn builder() -> VenueBuilder {
        VenueBuilder::new()
    }

    /// Validate the venue
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Venue name cannot be empty".to_string());
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err("Venue rating must be between 0 and 5".to_string());
        }

        if let Some(distance) = self.distance {
            if distance < 0.0 {
                return Err("Venue distance cannot be negative".to_string());
            }
        }

        Ok(())
    }
}

/// Builder for creating venues with optional fields
pub struct VenueBuilder {
    id: Option<String>,
    name: Option<String>,
    address: Option<String>,
    neighborhood: Option<String>,
    price_level: PriceLevel,
    rating: f32,
    review_count: u32,
    tags: Vec<String>,
    deals: Vec<Deal>,
    image: Option<String>,
    distance: Option<f64>,
    last_updated: Option<DateTime<Local>>,
}

impl VenueBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            address: None,
            neighborhood: None,
            price_level: PriceLevel::Moderate,
            rating: 0.0,
            review_count: 0,
            tags: Vec::new(),
            deals: Vec::new(),
            image: None,
            distance: None,
            last_updated: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn price_level(mut self, price_level: PriceLevel) -> Self {
        self.price_level = price_level;
        self
    }

    pub fn rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn deal(mut self, deal: Deal) -> Self {
        self.deals.push(deal);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn distance(mut self, miles: f64) -> Self {
        self.distance = Some(miles);
        self
    }

    pub fn last_updated(mut self, when: DateTime<Local>) -> Self {
        self.last_updated = Some(when);
        self
    }

    /// Build the venue
    pub fn build(self) -> Result<Venue, String> {
        let id = self.id.ok_or("Venue id is required")?;
        let name = self.name.ok_or("Venue name is required")?;

        let venue = Venue {
            id,
            name,
            address: self.address.unwrap_or_default(),
            neighborhood: self.neighborhood.unwrap_or_default(),
            price_level: self.price_level,
            rating: self.rating,
            review_count: self.review_count,
            tags: self.tags,
            deals: self.deals,
            image: self.image.unwrap_or_default(),
            distance: self.distance,
            last_updated: self.last_updated.unwrap_or_else(Local::now),
        };

        venue.validate()?;
        Ok(venue)
    }
}

impl Default for VenueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::deal::{DayOfWeek, Deal, DealType};

    fn sample_venue() -> Venue {
        Venue::builder()
            .id("1")
            .name("The Golden Hour")
            .address("123 Main St")
            .neighborhood("Downtown")
            .price_level(PriceLevel::Moderate)
            .rating(4.5, 342)
            .tags(&["Rooftop", "Cocktails", "Outdoor"])
            .distance(0.3)
            .deal(
                Deal::builder()
                    .id("d1")
                    .title("$5 House Cocktails")
                    .deal_type(DealType::Cocktails)
                    .days_active(DayOfWeek::weekdays())
                    .time_range("16:00", "19:00")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_basic() {
        let venue = sample_venue();
        assert_eq!(venue.id, "1");
        assert_eq!(venue.name, "The Golden Hour");
        assert_eq!(venue.neighborhood, "Downtown");
        assert_eq!(venue.price_level, PriceLevel::Moderate);
        assert_eq!(venue.rating, 4.5);
        assert_eq!(venue.review_count, 342);
        assert_eq!(venue.tags.len(), 3);
        assert_eq!(venue.deals.len(), 1);
        assert_eq!(venue.distance, Some(0.3));
    }

    #[test]
    fn test_builder_missing_name() {
        let result = Venue::builder().id("1").build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Venue name is required");
    }

    #[test]
    fn test_validate_empty_name() {
        let mut venue = sample_venue();
        venue.name = "  ".to_string();

        let result = venue.validate();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Venue name cannot be empty");
    }

    #[test]
    fn test_validate_rating_out_of_range() {
        let mut venue = sample_venue();
        venue.rating = 5.5;

        let result = venue.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("between 0 and 5"));
    }

    #[test]
    fn test_validate_negative_distance() {
        let mut venue = sample_venue();
        venue.distance = Some(-0.5);

        assert!(venue.validate().is_err());
    }

    #[test]
    fn test_distance_is_optional() {
        let venue = Venue::builder().id("7").name("Pop-Up Bar").build().unwrap();
        assert!(venue.distance.is_none());
    }

    #[test]
    fn test_price_level_symbols() {
        assert_eq!(PriceLevel::Budget.symbol(), "$");
        assert_eq!(PriceLevel::Moderate.symbol(), "$$");
        assert_eq!(PriceLevel::Upscale.symbol(), "$$$");
        assert_eq!(PriceLevel::Upscale.value(), 3);
    }
}
