// UI palette
// Fixed accent colors; no user theming

use egui::Color32;

/// Brand/headline color
pub const PRIMARY: Color32 = Color32::from_rgb(124, 58, 237);
/// Active-deal highlight (badges, card frames)
pub const ACCENT: Color32 = Color32::from_rgb(245, 158, 11);
/// Favorite-heart fill
pub const FAVORITE: Color32 = Color32::from_rgb(236, 72, 153);
/// De-emphasized text
pub const MUTED: Color32 = Color32::from_rgb(120, 120, 130);
/// Tinted background behind an active deal
pub const ACCENT_BG: Color32 = Color32::from_rgb(60, 48, 20);
