// Deal module
// Time- and day-scoped venue offers

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Category of a deal. `All` is a wildcard that matches every
/// deal-type filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    Beer,
    Wine,
    Cocktails,
    Food,
    All,
}

impl DealType {
    /// Display label for filter buttons and badges
    pub fn label(&self) -> &'static str {
        match self {
            DealType::Beer => "Beer",
            DealType::Wine => "Wine",
            DealType::Cocktails => "Cocktails",
            DealType::Food => "Food",
            DealType::All => "All",
        }
    }

    /// The types a user can select in the filter panel (the wildcard
    /// is not directly selectable)
    pub fn selectable() -> [DealType; 4] {
        [
            DealType::Beer,
            DealType::Wine,
            DealType::Cocktails,
            DealType::Food,
        ]
    }
}

/// Day of the week a deal can be active on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Display label ("Monday", "Tuesday", ...)
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Monday through Friday, the usual happy-hour span
    pub fn weekdays() -> Vec<DayOfWeek> {
        vec![
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
        ]
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// A wall-clock time window in `HH:MM` 24-hour strings.
///
/// When `end` is numerically earlier than `start` the range wraps past
/// midnight (e.g. 22:00-02:00 covers late evening into early morning).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A discount or offer attached to a venue, scoped to a set of days
/// and one time window per day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deal_type: DealType,
    pub price: Option<String>,
    pub days_active: Vec<DayOfWeek>,
    pub time_range: TimeRange,
}

impl Deal {
    /// Create a builder for constructing deals with optional fields
    pub fn builder() -> DealBuilder {
        DealBuilder::new()
    }

    /// Validate the deal
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Deal title cannot be empty".to_string());
        }

        if self.days_active.is_empty() {
            return Err("Deal must be active on at least one day".to_string());
        }

        Ok(())
    }
}

/// Builder for creating deals with optional fields
pub struct DealBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    deal_type: DealType,
    price: Option<String>,
    days_active: Vec<DayOfWeek>,
    time_range: Option<TimeRange>,
}

impl DealBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            description: None,
            deal_type: DealType::All,
            price: None,
            days_active: Vec::new(),
            time_range: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deal_type(mut self, deal_type: DealType) -> Self {
        self.deal_type = deal_type;
        self
    }

    /// Set the price label shown on the card (e.g. "$5", "50% off")
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn days_active(mut self, days: Vec<DayOfWeek>) -> Self {
        self.days_active = days;
        self
    }

    /// Set the daily time window (`HH:MM` start and end)
    pub fn time_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.time_range = Some(TimeRange::new(start, end));
        self
    }

    /// Build the deal
    pub fn build(self) -> Result<Deal, String> {
        let id = self.id.ok_or("Deal id is required")?;
        let title = self.title.ok_or("Deal title is required")?;
        let time_range = self.time_range.ok_or("Deal time range is required")?;

        let deal = Deal {
            id,
            title,
            description: self.description.unwrap_or_default(),
            deal_type: self.deal_type,
            price: self.price,
            days_active: self.days_active,
            time_range,
        };

        deal.validate()?;
        Ok(deal)
    }
}

impl Default for DealBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deal() -> Deal {
        Deal::builder()
            .id("d1")
            .title("$5 House Cocktails")
            .description("All house cocktails and draft beers")
            .deal_type(DealType::Cocktails)
            .price("$5")
            .days_active(DayOfWeek::weekdays())
            .time_range("16:00", "19:00")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_basic() {
        let deal = sample_deal();
        assert_eq!(deal.id, "d1");
        assert_eq!(deal.title, "$5 House Cocktails");
        assert_eq!(deal.deal_type, DealType::Cocktails);
        assert_eq!(deal.price, Some("$5".to_string()));
        assert_eq!(deal.days_active.len(), 5);
        assert_eq!(deal.time_range, TimeRange::new("16:00", "19:00"));
    }

    #[test]
    fn test_builder_missing_id() {
        let result = Deal::builder()
            .title("Taco Tuesday")
            .days_active(vec![DayOfWeek::Tuesday])
            .time_range("15:00", "20:00")
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Deal id is required");
    }

    #[test]
    fn test_builder_missing_time_range() {
        let result = Deal::builder()
            .id("d4")
            .title("Taco Tuesday")
            .days_active(vec![DayOfWeek::Tuesday])
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Deal time range is required");
    }

    #[test]
    fn test_validate_empty_title() {
        let mut deal = sample_deal();
        deal.title = "   ".to_string();

        let result = deal.validate();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Deal title cannot be empty");
    }

    #[test]
    fn test_validate_no_active_days() {
        let result = Deal::builder()
            .id("d9")
            .title("Bourbon Hour")
            .time_range("17:00", "19:00")
            .build();

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Deal must be active on at least one day"
        );
    }

    #[test]
    fn test_default_deal_type_is_wildcard() {
        let deal = Deal::builder()
            .id("d6")
            .title("All Day Happy Hour")
            .days_active(DayOfWeek::weekdays())
            .time_range("11:00", "19:00")
            .build()
            .unwrap();

        assert_eq!(deal.deal_type, DealType::All);
    }

    #[test]
    fn test_day_of_week_from_chrono() {
        assert_eq!(DayOfWeek::from(Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
    }

    #[test]
    fn test_deal_type_serde_lowercase() {
        let json = serde_json::to_string(&DealType::Cocktails).unwrap();
        assert_eq!(json, "\"cocktails\"");

        let parsed: DealType = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, DealType::All);
    }

    #[test]
    fn test_selectable_excludes_wildcard() {
        assert!(!DealType::selectable().contains(&DealType::All));
    }
}
