#![windows_subsystem = "windows"]
//! Top Destinations - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod destinations;
mod theme;
mod ui;

use app::App;
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};
use ui::components::{row_style, ROW_BORDER_WIDTH};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "top-destinations.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,top_destinations=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Top Destinations");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Top Destinations starting");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(900.0, 750.0))
        .with_min_inner_size([480.0, 360.0])
        .with_title("Top 5 Destination List");

    // Set window/taskbar icon from PNG
    match image::load_from_memory(include_bytes!("../assets/icon.png")) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = (rgba.width(), rgba.height());
            let icon = egui::IconData {
                rgba: rgba.into_raw(),
                width: w,
                height: h,
            };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        Err(e) => warn!(error = %e, "Failed to decode window icon"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Top Destinations",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard navigation over the list
        let (up, down, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if down {
            self.move_selection(1);
        }
        if up {
            self.move_selection(-1);
        }
        if escape {
            self.selected = None;
        }

        // Attribution label below the list (must be added BEFORE CentralPanel)
        egui::TopBottomPanel::bottom("attribution")
            .exact_height(theme::FOOTER_HEIGHT)
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(theme::BG_ELEVATED))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(theme::SPACING_MD);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} Created by Victor Udeh",
                                egui_phosphor::regular::MAP_PIN
                            ))
                            .size(theme::FONT_CAPTION)
                            .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            });

        // The destination list inside a scrollable pane
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;
                        for row in 0..self.destinations.len() {
                            self.render_destination_row(ui, row);
                        }
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
    }
}

// ============================================================================
// VIEW RENDERING
// ============================================================================

impl App {
    /// Paint one destination row: scaled icon beside wrapped caption text,
    /// styled by the row renderer for the current selection/focus state.
    fn render_destination_row(&mut self, ui: &mut egui::Ui, row: usize) {
        let ctx = ui.ctx().clone();
        let texture = self.thumbnail(&ctx, row);

        let selected = self.selected == Some(row);
        let focused = selected && self.list_focused;
        let style = row_style(&self.palette, selected, focused);

        let padding = self.row_padding;
        let icon_size = texture
            .as_ref()
            .map(|t| egui::vec2(t.size()[0] as f32, t.size()[1] as f32))
            .unwrap_or(egui::Vec2::ZERO);
        let icon_gap = if texture.is_some() {
            theme::SPACING_MD
        } else {
            0.0
        };

        let avail_width = ui.available_width();
        let inset = ROW_BORDER_WIDTH * 2.0;
        let text_width = (avail_width
            - (padding.left + padding.right) as f32
            - icon_size.x
            - icon_gap
            - inset)
            .max(40.0);
        let galley = ui.fonts(|f| {
            f.layout(
                self.destinations[row].text().to_owned(),
                egui::FontId::proportional(theme::FONT_BODY),
                style.foreground,
                text_width,
            )
        });

        let content_height = icon_size.y.max(galley.size().y);
        let row_height = content_height + (padding.top + padding.bottom) as f32 + inset;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(avail_width, row_height), egui::Sense::click());
        if response.clicked() {
            self.selected = Some(row);
            self.list_focused = true;
        }
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        // Opaque fill first so the selection background shows through
        painter.rect_filled(rect, 0.0, style.background);
        painter.rect_stroke(rect, 0.0, style.border, egui::StrokeKind::Inside);

        let inner = egui::Rect::from_min_max(
            egui::pos2(
                rect.min.x + ROW_BORDER_WIDTH + padding.left as f32,
                rect.min.y + ROW_BORDER_WIDTH + padding.top as f32,
            ),
            egui::pos2(
                rect.max.x - ROW_BORDER_WIDTH - padding.right as f32,
                rect.max.y - ROW_BORDER_WIDTH - padding.bottom as f32,
            ),
        );

        if let Some(texture) = &texture {
            let icon_rect = egui::Rect::from_min_size(
                egui::pos2(inner.min.x, inner.center().y - icon_size.y / 2.0),
                icon_size,
            );
            painter.image(
                texture.id(),
                icon_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        let text_pos = egui::pos2(
            inner.min.x + icon_size.x + icon_gap,
            inner.center().y - galley.size().y / 2.0,
        );
        painter.galley(text_pos, galley, style.foreground);
    }
}
