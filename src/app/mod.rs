//! App module - contains the main application state and logic

use crate::destinations::{self, Destination};
use crate::theme;
use crate::ui::components::ListPalette;
use eframe::egui;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    /// The list model. Populated once at construction, never mutated.
    pub(crate) destinations: Vec<Destination>,
    // Transient render state, derived per repaint
    pub(crate) selected: Option<usize>,
    pub(crate) list_focused: bool,
    pub(crate) palette: ListPalette,
    /// Inner padding the row renderer wraps around each cell's content.
    pub(crate) row_padding: egui::Margin,
    // Lazily-uploaded thumbnail textures, one slot per row
    pub(crate) thumbnails: Vec<Option<egui::TextureHandle>>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::from_model(destinations::top_five())
    }

    fn from_model(destinations: Vec<Destination>) -> Self {
        let thumbnails = vec![None; destinations.len()];
        Self {
            destinations,
            selected: None,
            list_focused: true,
            palette: ListPalette::default(),
            row_padding: egui::Margin::same(10),
            thumbnails,
        }
    }

    /// Upload the row's thumbnail to the GPU on first use; cached afterwards.
    /// Rows without a decodable icon stay empty.
    pub fn thumbnail(
        &mut self,
        ctx: &egui::Context,
        row: usize,
    ) -> Option<egui::TextureHandle> {
        if let Some(texture) = &self.thumbnails[row] {
            return Some(texture.clone());
        }

        let icon = self.destinations[row].icon()?;
        let size = [icon.width() as usize, icon.height() as usize];
        let texture = ctx.load_texture(
            format!("destination_{row}"),
            egui::ColorImage::from_rgba_unmultiplied(size, icon.as_raw()),
            egui::TextureOptions::LINEAR,
        );
        self.thumbnails[row] = Some(texture.clone());
        Some(texture)
    }

    /// Move the selection by `delta` rows, clamped to the list bounds.
    pub fn move_selection(&mut self, delta: isize) {
        if self.destinations.is_empty() {
            return;
        }
        let last = self.destinations.len() - 1;
        let next = match self.selected {
            Some(idx) => (idx as isize + delta).clamp(0, last as isize) as usize,
            None => {
                if delta >= 0 {
                    0
                } else {
                    last
                }
            }
        };
        self.selected = Some(next);
        self.list_focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations;

    #[test]
    fn fresh_app_has_five_rows_and_no_selection() {
        let app = App::from_model(destinations::top_five());
        assert_eq!(app.destinations.len(), 5);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn selection_moves_and_clamps_at_the_ends() {
        let mut app = App::from_model(destinations::top_five());
        app.move_selection(1);
        assert_eq!(app.selected, Some(0));
        app.move_selection(-1);
        assert_eq!(app.selected, Some(0));
        app.move_selection(10);
        assert_eq!(app.selected, Some(4));
        app.move_selection(1);
        assert_eq!(app.selected, Some(4));
    }
}
