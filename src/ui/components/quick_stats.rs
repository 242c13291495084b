// Quick stats row
// Headline counts above the card list

use egui::{RichText, Ui};

use crate::services::catalog::CatalogStats;
use crate::ui::theme;

/// Render the three stat tiles: active now, total deals, top rated
pub fn render_quick_stats(ui: &mut Ui, stats: &CatalogStats) {
    ui.columns(3, |columns| {
        stat_tile(&mut columns[0], "Active Now", stats.active_venues);
        stat_tile(&mut columns[1], "Total Deals", stats.total_deals);
        stat_tile(&mut columns[2], "Top Rated", stats.top_rated);
    });
}

fn stat_tile(ui: &mut Ui, label: &str, value: usize) {
    egui::Frame::group(ui.style())
        .rounding(8.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value.to_string())
                        .heading()
                        .color(theme::ACCENT),
                );
                ui.label(RichText::new(label).small().color(theme::MUTED));
            });
        });
}
