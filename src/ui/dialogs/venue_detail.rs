// Venue detail dialog
// Full deal list plus share and directions actions

use chrono::{DateTime, Local};
use egui::{Context, RichText};

use crate::models::venue::Venue;
use crate::services::clock::Moment;
use crate::services::deals::is_deal_active;
use crate::ui::theme;
use crate::utils::time::{format_time_range, relative_time};

/// What the user requested from the detail dialog this frame.
/// Side effects (clipboard, browser) are the app's job, not the dialog's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueDetailAction {
    None,
    Share,
    Directions,
}

/// Render the detail window for a venue. `open` is cleared when the
/// user dismisses the window.
pub fn render_venue_detail(
    ctx: &Context,
    venue: &Venue,
    open: &mut bool,
    moment: &Moment,
    now: DateTime<Local>,
) -> VenueDetailAction {
    let mut action = VenueDetailAction::None;

    egui::Window::new(&venue.name)
        .open(open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("★ {} ({} reviews)", venue.rating, venue.review_count));
                ui.label(RichText::new(venue.price_level.symbol()).color(theme::MUTED));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Directions").clicked() {
                        action = VenueDetailAction::Directions;
                    }
                    if ui.button("Share").clicked() {
                        action = VenueDetailAction::Share;
                    }
                });
            });

            ui.add_space(4.0);
            ui.label(RichText::new(&venue.address).strong());
            ui.label(RichText::new(&venue.neighborhood).color(theme::MUTED));
            if let Some(distance) = venue.distance {
                ui.label(RichText::new(format!("{} miles away", distance)).color(theme::MUTED));
            }

            ui.horizontal_wrapped(|ui| {
                for tag in &venue.tags {
                    ui.label(RichText::new(tag).small().weak());
                }
            });

            ui.separator();
            ui.label(RichText::new("Happy Hour Deals").heading());

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for deal in &venue.deals {
                    let active = is_deal_active(deal, moment);
                    let frame = if active {
                        egui::Frame::group(ui.style())
                            .fill(theme::ACCENT_BG)
                            .stroke(egui::Stroke::new(1.0, theme::ACCENT))
                            .rounding(6.0)
                    } else {
                        egui::Frame::group(ui.style()).rounding(6.0)
                    };

                    frame.show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&deal.title).strong());
                            if active {
                                ui.label(
                                    RichText::new("Active Now").small().color(theme::ACCENT),
                                );
                            }
                        });
                        ui.label(RichText::new(&deal.description).color(theme::MUTED));
                        ui.horizontal(|ui| {
                            if let Some(price) = &deal.price {
                                ui.label(RichText::new(price).strong().color(theme::PRIMARY));
                            }
                            ui.label(
                                RichText::new(format_time_range(&deal.time_range))
                                    .color(theme::MUTED),
                            );
                        });

                        let days: Vec<&str> =
                            deal.days_active.iter().map(|d| d.label()).collect();
                        ui.label(RichText::new(days.join(", ")).small().color(theme::MUTED));
                    });
                    ui.add_space(4.0);
                }
            });

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(relative_time(venue.last_updated, now))
                        .small()
                        .color(theme::MUTED),
                );
            });
        });

    action
}

/// Deep link copied to the clipboard by the Share action
pub fn share_link(venue: &Venue) -> String {
    format!("happyhour://venue/{}", venue.id)
}

/// External map URL opened by the Directions action
pub fn directions_url(venue: &Venue) -> String {
    format!(
        "https://maps.google.com/?q={}",
        urlencoding::encode(&venue.address)
    )
}
