// Venue card
// One catalog entry in the scrollable result list

use chrono::{DateTime, Local};
use egui::{RichText, Ui};

use crate::models::venue::Venue;
use crate::services::clock::Moment;
use crate::services::deals::{has_active_deal, is_deal_active};
use crate::ui::theme;
use crate::utils::time::{format_time_range, relative_time};

/// What the user did with a card this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueCardAction {
    None,
    /// Open the detail view
    Open,
    /// Flip the favorite heart
    ToggleFavorite,
}

/// Render one venue card. `moment` and `now` are sampled once per frame
/// by the caller so every card agrees on what is active.
pub fn render_venue_card(
    ui: &mut Ui,
    venue: &Venue,
    is_favorite: bool,
    moment: &Moment,
    now: DateTime<Local>,
) -> VenueCardAction {
    let mut action = VenueCardAction::None;

    egui::Frame::group(ui.style())
        .rounding(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .link(RichText::new(&venue.name).heading())
                    .clicked()
                {
                    action = VenueCardAction::Open;
                }

                if has_active_deal(venue, moment) {
                    ui.label(
                        RichText::new("● Active Now")
                            .small()
                            .color(theme::ACCENT)
                            .strong(),
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let heart = if is_favorite { "♥" } else { "♡" };
                    let heart_color = if is_favorite {
                        theme::FAVORITE
                    } else {
                        theme::MUTED
                    };
                    if ui
                        .button(RichText::new(heart).color(heart_color).size(18.0))
                        .on_hover_text("Favorite")
                        .clicked()
                    {
                        action = VenueCardAction::ToggleFavorite;
                    }
                });
            });

            let mut subtitle = venue.neighborhood.clone();
            if let Some(distance) = venue.distance {
                subtitle.push_str(&format!(" • {} mi", distance));
            }
            subtitle.push_str(&format!(" • {}", venue.price_level.symbol()));
            ui.label(RichText::new(subtitle).color(theme::MUTED));

            ui.label(format!("★ {} ({})", venue.rating, venue.review_count));

            ui.horizontal_wrapped(|ui| {
                for tag in venue.tags.iter().take(3) {
                    ui.label(RichText::new(tag).small().weak());
                }
            });

            for deal in venue.deals.iter().take(2) {
                let active = is_deal_active(deal, moment);
                let frame = if active {
                    egui::Frame::none()
                        .fill(theme::ACCENT_BG)
                        .rounding(4.0)
                        .inner_margin(egui::Margin::same(6.0))
                } else {
                    egui::Frame::none().inner_margin(egui::Margin::same(6.0))
                };

                frame.show(ui, |ui| {
                    ui.label(RichText::new(&deal.title).strong());
                    ui.label(
                        RichText::new(format_time_range(&deal.time_range))
                            .small()
                            .color(theme::MUTED),
                    );
                });
            }

            if venue.deals.len() > 2 {
                ui.label(
                    RichText::new(format!("+{} more deals", venue.deals.len() - 2))
                        .small()
                        .color(theme::MUTED),
                );
            }

            ui.separator();
            ui.label(
                RichText::new(relative_time(venue.last_updated, now))
                    .small()
                    .color(theme::MUTED),
            );
        });

    action
}
