// Filter panel
// Deal-type, price-level, and active-now controls

use egui::{RichText, Ui};

use crate::models::deal::DealType;
use crate::models::filter::FilterState;
use crate::models::venue::PriceLevel;
use crate::ui::theme;

/// Render the filter panel, mutating `filters` in place.
/// Returns true when any selection changed this frame.
pub fn render_filter_panel(ui: &mut Ui, filters: &mut FilterState) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.heading("Filters");
        if filters.has_active_filters() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Clear All").clicked() {
                    filters.clear();
                    changed = true;
                }
            });
        }
    });

    ui.separator();

    if ui
        .checkbox(&mut filters.active_now, "Active Now")
        .changed()
    {
        changed = true;
    }

    ui.add_space(8.0);
    ui.label(RichText::new("Deal Type").strong());
    ui.horizontal_wrapped(|ui| {
        for deal_type in DealType::selectable() {
            let selected = filters.deal_types.contains(&deal_type);
            if ui.selectable_label(selected, deal_type.label()).clicked() {
                filters.toggle_deal_type(deal_type);
                changed = true;
            }
        }
    });

    ui.add_space(8.0);
    ui.label(RichText::new("Price Level").strong());
    ui.horizontal(|ui| {
        for level in PriceLevel::all() {
            let selected = filters.price_levels.contains(&level);
            if ui.selectable_label(selected, level.symbol()).clicked() {
                filters.toggle_price_level(level);
                changed = true;
            }
        }
    });

    if filters.has_active_filters() {
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("{} active filters", filters.active_filter_count()))
                .small()
                .color(theme::MUTED),
        );
    }

    changed
}
