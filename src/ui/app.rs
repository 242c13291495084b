// Application shell
// Owns UI state and wires services into egui panels

mod toast;

use chrono::{DateTime, Local};
use egui::RichText;

use self::toast::ToastManager;
use crate::models::filter::FilterState;
use crate::models::venue::Venue;
use crate::services::catalog::{self, filter_venues, CatalogStats};
use crate::services::clock::{Clock, Moment};
use crate::services::database::Database;
use crate::services::favorites::{Favorites, SqliteFavoritesStore};
use crate::ui::components::filter_panel::render_filter_panel;
use crate::ui::components::quick_stats::render_quick_stats;
use crate::ui::components::venue_card::{render_venue_card, VenueCardAction};
use crate::ui::dialogs::venue_detail::{
    directions_url, render_venue_detail, share_link, VenueDetailAction,
};
use crate::ui::theme;

pub struct HappyHourApp {
    /// Static catalog, loaded once at startup
    catalog: Vec<Venue>,
    /// Current filter selections; recomputing the filtered list from
    /// these every frame is cheap and keeps the view a pure function
    filters: FilterState,
    favorites: Favorites<SqliteFavoritesStore<'static>>,
    clock: Box<dyn Clock>,
    /// Id of the venue whose detail dialog is open
    selected_venue: Option<String>,
    show_filters: bool,
    toasts: ToastManager,
}

impl HappyHourApp {
    /// Build the app against a leaked database handle and a clock
    pub fn new(database: &'static Database, clock: Box<dyn Clock>) -> anyhow::Result<Self> {
        let catalog = catalog::venues()
            .map_err(|e| anyhow::anyhow!("Invalid catalog entry: {}", e))?;
        let favorites = Favorites::load(SqliteFavoritesStore::new(database))?;

        log::info!(
            "Catalog loaded: {} venues, {} favorites",
            catalog.len(),
            favorites.len()
        );

        Ok(Self {
            catalog,
            filters: FilterState::default(),
            favorites,
            clock,
            selected_venue: None,
            show_filters: false,
            toasts: ToastManager::new(),
        })
    }

    fn render_header(&mut self, ctx: &egui::Context, result_count: usize) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("HappyHourAI")
                            .heading()
                            .color(theme::PRIMARY)
                            .strong(),
                    );
                    ui.label(
                        RichText::new("Less scrolling. More sipping.")
                            .small()
                            .color(theme::MUTED),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let count = self.filters.active_filter_count();
                    let label = if count > 0 {
                        format!("Filters ({})", count)
                    } else {
                        "Filters".to_string()
                    };
                    if ui.selectable_label(self.show_filters, label).clicked() {
                        self.show_filters = !self.show_filters;
                    }
                });
            });

            ui.add_space(4.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.filters.search_query)
                    .hint_text("Search by venue, neighborhood, or vibe...")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Downtown • Showing {} venues", result_count))
                    .small()
                    .color(theme::MUTED),
            );
            ui.add_space(6.0);
        });
    }

    fn render_venue_list(
        &mut self,
        ui: &mut egui::Ui,
        filtered: &[Venue],
        moment: &Moment,
        now: DateTime<Local>,
    ) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for venue in filtered {
                let action =
                    render_venue_card(ui, venue, self.favorites.contains(&venue.id), moment, now);
                match action {
                    VenueCardAction::Open => {
                        self.selected_venue = Some(venue.id.clone());
                    }
                    VenueCardAction::ToggleFavorite => self.toggle_favorite(&venue.id),
                    VenueCardAction::None => {}
                }
                ui.add_space(8.0);
            }

            if !self.favorites.is_empty() && !filtered.is_empty() {
                egui::Frame::group(ui.style()).rounding(8.0).show(ui, |ui| {
                    let count = self.favorites.len();
                    ui.label(
                        RichText::new(format!(
                            "♥ {} Favorite{}",
                            count,
                            if count == 1 { "" } else { "s" }
                        ))
                        .color(theme::FAVORITE)
                        .strong(),
                    );
                    ui.label(
                        RichText::new(
                            "Your saved venues are always easy to find. Come back anytime!",
                        )
                        .small()
                        .color(theme::MUTED),
                    );
                });
            }
        });
    }

    fn render_empty_state(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(RichText::new("No deals found").heading());
            ui.label(
                RichText::new("Try adjusting your filters or search terms").color(theme::MUTED),
            );
            ui.add_space(8.0);
            if ui.button("Clear All Filters").clicked() {
                self.filters = FilterState::default();
            }
        });
    }

    fn render_detail(&mut self, ctx: &egui::Context, moment: &Moment, now: DateTime<Local>) {
        let Some(selected_id) = self.selected_venue.clone() else {
            return;
        };
        let Some(venue) = self.catalog.iter().find(|v| v.id == selected_id).cloned() else {
            self.selected_venue = None;
            return;
        };

        let mut open = true;
        let action = render_venue_detail(ctx, &venue, &mut open, moment, now);

        match action {
            VenueDetailAction::Share => {
                let link = share_link(&venue);
                ctx.output_mut(|o| o.copied_text = link);
                self.toasts.success("Link copied to clipboard!");
            }
            VenueDetailAction::Directions => {
                let url = directions_url(&venue);
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("Failed to open directions for {}: {}", venue.name, e);
                    self.toasts.error("Could not open maps");
                }
            }
            VenueDetailAction::None => {}
        }

        if !open {
            self.selected_venue = None;
        }
    }

    fn toggle_favorite(&mut self, venue_id: &str) {
        if let Err(e) = self.favorites.toggle(venue_id) {
            log::warn!("Failed to save favorites: {:#}", e);
            self.toasts.error("Could not save favorites");
        }
    }
}

impl eframe::App for HappyHourApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One clock sample per frame; every activity check below sees
        // the same moment
        let moment = self.clock.now();
        let now = Local::now();

        let filtered = filter_venues(&self.catalog, &self.filters, &moment);

        self.render_header(ctx, filtered.len());

        if self.show_filters {
            egui::SidePanel::left("filter_panel")
                .default_width(240.0)
                .show(ctx, |ui| {
                    if render_filter_panel(ui, &mut self.filters) {
                        log::debug!("Filters changed: {:?}", self.filters);
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            render_quick_stats(ui, &CatalogStats::compute(&self.catalog, &moment));
            ui.add_space(8.0);

            if filtered.is_empty() {
                self.render_empty_state(ui);
            } else {
                self.render_venue_list(ui, &filtered, &moment, now);
            }
        });

        self.render_detail(ctx, &moment, now);
        self.toasts.render(ctx);
    }
}
