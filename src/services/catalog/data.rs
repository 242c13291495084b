// Sample venue catalog
// Static, hardcoded data; timestamps are relative to startup

use chrono::{Duration, Local};

use crate::models::deal::{DayOfWeek, Deal, DealType};
use crate::models::venue::{PriceLevel, Venue};

/// The built-in venue catalog.
///
/// Deals carry their original ids so favorites saved by earlier builds
/// keep resolving. Last-updated stamps are offsets from startup, standing
/// in for a real feed.
pub fn venues() -> Result<Vec<Venue>, String> {
    let now = Local::now();

    Ok(vec![
        Venue::builder()
            .id("1")
            .name("The Golden Hour")
            .address("123 Main St")
            .neighborhood("Downtown")
            .price_level(PriceLevel::Moderate)
            .rating(4.5, 342)
            .tags(&["Rooftop", "Cocktails", "Outdoor"])
            .image("https://images.unsplash.com/photo-1514933651103-005eec06c04b?w=800&q=80")
            .distance(0.3)
            .last_updated(now - Duration::hours(2))
            .deal(
                Deal::builder()
                    .id("d1")
                    .title("$5 House Cocktails")
                    .description("All house cocktails and draft beers")
                    .deal_type(DealType::Cocktails)
                    .price("$5")
                    .days_active(DayOfWeek::weekdays())
                    .time_range("16:00", "19:00")
                    .build()?,
            )
            .deal(
                Deal::builder()
                    .id("d2")
                    .title("Half-Price Wine")
                    .description("All wine by the glass")
                    .deal_type(DealType::Wine)
                    .price("50% off")
                    .days_active(DayOfWeek::weekdays())
                    .time_range("16:00", "18:00")
                    .build()?,
            )
            .build()?,
        Venue::builder()
            .id("2")
            .name("Brewmaster's Hideaway")
            .address("456 Elm Ave")
            .neighborhood("Arts District")
            .price_level(PriceLevel::Budget)
            .rating(4.7, 523)
            .tags(&["Craft Beer", "Casual", "Games"])
            .image("https://images.unsplash.com/photo-1572116469696-31de0f17cc34?w=800&q=80")
            .distance(0.7)
            .last_updated(now - Duration::hours(5))
            .deal(
                Deal::builder()
                    .id("d3")
                    .title("$3 Draft Beers")
                    .description("Select draft beers and appetizers")
                    .deal_type(DealType::Beer)
                    .price("$3")
                    .days_active(DayOfWeek::weekdays())
                    .time_range("15:00", "18:00")
                    .build()?,
            )
            .deal(
                Deal::builder()
                    .id("d4")
                    .title("Taco Tuesday")
                    .description("$2 tacos with drink purchase")
                    .deal_type(DealType::Food)
                    .price("$2")
                    .days_active(vec![DayOfWeek::Tuesday])
                    .time_range("15:00", "20:00")
                    .build()?,
            )
            .build()?,
        Venue::builder()
            .id("3")
            .name("Sunset Lounge")
            .address("789 Beach Blvd")
            .neighborhood("Waterfront")
            .price_level(PriceLevel::Upscale)
            .rating(4.3, 287)
            .tags(&["Upscale", "Ocean View", "Live Music"])
            .image("https://images.unsplash.com/photo-1566417713940-fe7c737a9ef2?w=800&q=80")
            .distance(1.2)
            .last_updated(now - Duration::hours(12))
            .deal(
                Deal::builder()
                    .id("d5")
                    .title("Wine Down Wednesday")
                    .description("$6 select wines and small plates")
                    .deal_type(DealType::Wine)
                    .price("$6")
                    .days_active(vec![DayOfWeek::Wednesday])
                    .time_range("17:00", "20:00")
                    .build()?,
            )
            .build()?,
        Venue::builder()
            .id("4")
            .name("The Local Tap")
            .address("321 Oak Street")
            .neighborhood("University District")
            .price_level(PriceLevel::Budget)
            .rating(4.6, 612)
            .tags(&["Sports Bar", "Wings", "Beer Garden"])
            .image("https://images.unsplash.com/photo-1513104890138-7c749659a591?w=800&q=80")
            .distance(0.5)
            .last_updated(now - Duration::hours(3))
            .deal(
                Deal::builder()
                    .id("d6")
                    .title("All Day Happy Hour")
                    .description("$4 select beers and well drinks")
                    .deal_type(DealType::All)
                    .price("$4")
                    .days_active(DayOfWeek::weekdays())
                    .time_range("11:00", "19:00")
                    .build()?,
            )
            .deal(
                Deal::builder()
                    .id("d7")
                    .title("Wing Wednesday")
                    .description("50¢ wings with any drink")
                    .deal_type(DealType::Food)
                    .price("50¢")
                    .days_active(vec![DayOfWeek::Wednesday])
                    .time_range("16:00", "22:00")
                    .build()?,
            )
            .build()?,
        Venue::builder()
            .id("5")
            .name("Verde Garden Bar")
            .address("555 Park Lane")
            .neighborhood("Midtown")
            .price_level(PriceLevel::Moderate)
            .rating(4.4, 198)
            .tags(&["Garden Patio", "Farm-to-Table", "Cocktails"])
            .image("https://images.unsplash.com/photo-1470337458703-46ad1756a187?w=800&q=80")
            .distance(0.9)
            .last_updated(now - Duration::hours(1))
            .deal(
                Deal::builder()
                    .id("d8")
                    .title("Garden Hour")
                    .description("$7 craft cocktails and $5 small bites")
                    .deal_type(DealType::Cocktails)
                    .price("$7")
                    .days_active(vec![
                        DayOfWeek::Tuesday,
                        DayOfWeek::Wednesday,
                        DayOfWeek::Thursday,
                        DayOfWeek::Friday,
                    ])
                    .time_range("16:00", "18:30")
                    .build()?,
            )
            .build()?,
        Venue::builder()
            .id("6")
            .name("Bourbon & Branch")
            .address("888 Whiskey Row")
            .neighborhood("Historic District")
            .price_level(PriceLevel::Upscale)
            .rating(4.8, 456)
            .tags(&["Whiskey Bar", "Speakeasy", "Craft Cocktails"])
            .image("https://images.unsplash.com/photo-1509669803555-fd5dbb783b5f?w=800&q=80")
            .distance(1.5)
            .last_updated(now - Duration::hours(8))
            .deal(
                Deal::builder()
                    .id("d9")
                    .title("Bourbon Hour")
                    .description("$8 select bourbons and classic cocktails")
                    .deal_type(DealType::Cocktails)
                    .price("$8")
                    .days_active(vec![DayOfWeek::Thursday, DayOfWeek::Friday])
                    .time_range("17:00", "19:00")
                    .build()?,
            )
            .build()?,
    ])
}
