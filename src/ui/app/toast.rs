//! Toast notifications for brief action feedback ("Link copied", etc).
//!
//! Toasts stack in the bottom-right corner and disappear after a few
//! seconds; they never block input.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const TOAST_WIDTH: f32 = 280.0;
const TOAST_HEIGHT: f32 = 36.0;
const MARGIN: f32 = 12.0;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    fn background(self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(30, 70, 40),
            ToastLevel::Error => Color32::from_rgb(80, 30, 30),
        }
    }

    fn text(self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(120, 230, 140),
            ToastLevel::Error => Color32::from_rgb(255, 130, 130),
        }
    }
}

/// A single transient notification
#[derive(Debug, Clone)]
struct Toast {
    message: String,
    level: ToastLevel,
    created_at: Instant,
}

impl Toast {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= Duration::from_secs(3)
    }
}

/// Owns the active toasts and renders them each frame
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast {
            message: message.into(),
            level,
            created_at: Instant::now(),
        });
    }

    /// Drop expired toasts and draw the rest, stacked upward from the
    /// bottom-right corner
    pub fn render(&mut self, ctx: &Context) {
        self.toasts.retain(|t| !t.is_expired());

        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while a toast is visible so expiry is seen
        ctx.request_repaint();

        let screen = ctx.screen_rect();
        for (i, toast) in self.toasts.iter().enumerate() {
            let y_offset = (i as f32) * (TOAST_HEIGHT + 6.0);
            let pos = Pos2::new(
                screen.right() - TOAST_WIDTH - MARGIN,
                screen.bottom() - TOAST_HEIGHT - MARGIN - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(toast.level.background())
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_min_width(TOAST_WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(toast.level.icon())
                                        .color(toast.level.text())
                                        .strong(),
                                );
                                ui.label(
                                    RichText::new(&toast.message).color(toast.level.text()),
                                );
                            });
                        });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_is_empty() {
        let manager = ToastManager::new();
        assert!(manager.toasts.is_empty());
    }

    #[test]
    fn test_push_levels() {
        let mut manager = ToastManager::new();
        manager.success("Link copied to clipboard!");
        manager.error("Could not save favorites");

        assert_eq!(manager.toasts.len(), 2);
        assert_eq!(manager.toasts[0].level, ToastLevel::Success);
        assert_eq!(manager.toasts[1].level, ToastLevel::Error);
    }

    #[test]
    fn test_fresh_toast_not_expired() {
        let mut manager = ToastManager::new();
        manager.success("saved");
        assert!(!manager.toasts[0].is_expired());
    }
}
