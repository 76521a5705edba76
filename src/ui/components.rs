//! Reusable UI components
//!
//! Holds the row renderer logic for the destination list: a pure mapping
//! from the list's palette plus per-row state to the row's visual style.

use crate::theme;
use eframe::egui;

/// Width of the border ring drawn around every row, focused or not.
/// The no-focus border is transparent so row geometry stays stable.
pub const ROW_BORDER_WIDTH: f32 = 1.0;

/// Colors the list hands to the row renderer on each repaint.
#[derive(Clone, Copy)]
pub struct ListPalette {
    pub background: egui::Color32,
    pub foreground: egui::Color32,
    pub selection_background: egui::Color32,
    pub selection_foreground: egui::Color32,
    pub focus_border: egui::Color32,
}

impl Default for ListPalette {
    fn default() -> Self {
        Self {
            background: theme::BG_BASE,
            foreground: theme::TEXT_SECONDARY,
            selection_background: theme::LIST_ROW_SELECTED,
            selection_foreground: theme::TEXT_PRIMARY,
            focus_border: theme::ACCENT,
        }
    }
}

/// Resolved visual state for one row.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RowStyle {
    pub background: egui::Color32,
    pub foreground: egui::Color32,
    pub border: egui::Stroke,
}

/// Map the list palette plus selection/focus state to row colors and
/// border. Stateless; called once per visible row per repaint.
pub fn row_style(palette: &ListPalette, selected: bool, focused: bool) -> RowStyle {
    let (background, foreground) = if selected {
        (palette.selection_background, palette.selection_foreground)
    } else {
        (palette.background, palette.foreground)
    };
    let border = if focused {
        egui::Stroke::new(ROW_BORDER_WIDTH, palette.focus_border)
    } else {
        egui::Stroke::new(ROW_BORDER_WIDTH, egui::Color32::TRANSPARENT)
    };
    RowStyle {
        background,
        foreground,
        border,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_uses_selection_colors() {
        let palette = ListPalette::default();
        let style = row_style(&palette, true, false);
        assert_eq!(style.background, palette.selection_background);
        assert_eq!(style.foreground, palette.selection_foreground);
    }

    #[test]
    fn unselected_row_uses_plain_colors() {
        let palette = ListPalette::default();
        let style = row_style(&palette, false, false);
        assert_eq!(style.background, palette.background);
        assert_eq!(style.foreground, palette.foreground);
    }

    #[test]
    fn focus_border_differs_from_default_border() {
        let palette = ListPalette::default();
        let focused = row_style(&palette, true, true);
        let unfocused = row_style(&palette, true, false);
        assert_ne!(focused.border, unfocused.border);
        assert_eq!(focused.border.color, palette.focus_border);
    }

    #[test]
    fn no_focus_border_is_a_fixed_transparent_ring() {
        let palette = ListPalette::default();
        let style = row_style(&palette, false, false);
        assert_eq!(style.border.width, ROW_BORDER_WIDTH);
        assert_eq!(style.border.color, egui::Color32::TRANSPARENT);
    }
}
