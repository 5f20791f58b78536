// TaxDesk - ui/theme.rs
//
// Colour scheme, status and payment colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::app::state::StatusKind;
use egui::Color32;

/// Colour for a status bar message.
pub fn status_colour(kind: StatusKind, dark_mode: bool) -> Color32 {
    match (kind, dark_mode) {
        (StatusKind::Info, true) => Color32::from_rgb(209, 213, 219), // Gray 300
        (StatusKind::Info, false) => Color32::from_rgb(55, 65, 81),   // Gray 700
        (StatusKind::Success, true) => Color32::from_rgb(74, 222, 128), // Green 400
        (StatusKind::Success, false) => Color32::from_rgb(21, 128, 61), // Green 700
        (StatusKind::Warning, true) => Color32::from_rgb(253, 186, 116), // Orange 300
        (StatusKind::Warning, false) => Color32::from_rgb(194, 65, 12), // Orange 700
        (StatusKind::Error, true) => Color32::from_rgb(248, 113, 113), // Red 400
        (StatusKind::Error, false) => Color32::from_rgb(185, 28, 28), // Red 700
    }
}

/// Colour for a payment status cell. Unpaid values stand out; anything
/// else uses the normal text colour.
pub fn payment_colour(status: &str, dark_mode: bool) -> Option<Color32> {
    let s = status.trim().to_lowercase();
    if s.contains("belum") || s.contains("tunggak") {
        Some(status_colour(StatusKind::Error, dark_mode))
    } else if s == "lunas" {
        Some(status_colour(StatusKind::Success, dark_mode))
    } else {
        None
    }
}

/// Warning text colour used in the data summary window.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const CELL_FONT_SIZE: f32 = 12.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_is_highlighted_red() {
        assert_eq!(
            payment_colour("BELUM LUNAS", true),
            Some(status_colour(StatusKind::Error, true))
        );
        assert_eq!(
            payment_colour(" lunas ", false),
            Some(status_colour(StatusKind::Success, false))
        );
        assert_eq!(payment_colour("", true), None);
    }
}
