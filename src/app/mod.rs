//! egui front ends for the two tools.

mod tester;
mod validator;
mod worker;

pub use tester::TesterApp;
pub use validator::ValidatorApp;
pub use worker::{PendingRequest, spawn_request};

use eframe::egui;
use egui::IconData;

const CRABIPROBE_ICON_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAAPElEQVR42mNgoDa4FmPyHx+mSDNeQ4jVjNUQdMmvy5SxYpyGEKMZmyGjBtDKALKikeKERJWkTJXMRA4AAK0QsIyICWouAAAAAElFTkSuQmCC";

const GREEN: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const RED: egui::Color32 = egui::Color32::from_rgb(0xF4, 0x43, 0x36);

pub fn native_options(size: (f32, f32)) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(size)
        .with_min_inner_size((320.0, 240.0));
    if let Some(icon) = load_icon_from_base64() {
        viewport = viewport.with_icon(icon);
    }
    eframe::NativeOptions {
        viewport,
        ..eframe::NativeOptions::default()
    }
}

fn load_icon_from_base64() -> Option<IconData> {
    use base64::Engine;

    let icon_bytes = base64::engine::general_purpose::STANDARD
        .decode(CRABIPROBE_ICON_BASE64)
        .ok()?;
    let image = match egui_extras::image::load_image_bytes(&icon_bytes) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("failed to load window icon: {e}");
            return None;
        }
    };

    Some(IconData {
        rgba: image.as_raw().to_vec(),
        width: image.width() as u32,
        height: image.height() as u32,
    })
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).strong());
}

fn single_line(ui: &mut egui::Ui, enabled: bool, value: &mut String) {
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value)
            .desired_width(f32::INFINITY)
            .min_size(egui::vec2(0.0, 26.0))
            .vertical_align(egui::Align::Center),
    );
}

fn action_button(ui: &mut egui::Ui, enabled: bool, text: &str, fill: egui::Color32) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE))
            .fill(fill)
            .min_size(egui::vec2(120.0, 30.0)),
    )
    .clicked()
}

/// Read-only, scrollable output box filling the remaining space.
fn output_area(ui: &mut egui::Ui, id: &str, text: &str) {
    egui::Frame::NONE
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)))
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            let mut text = text;
            egui::ScrollArea::vertical().id_salt(id).show(ui, |ui| {
                let line_height = ui.text_style_height(&egui::TextStyle::Monospace);
                let rows = (ui.available_height() / line_height).max(1.0) as usize;
                ui.expand_to_include_rect(ui.max_rect());
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .code_editor()
                        .desired_width(f32::INFINITY)
                        .desired_rows(rows),
                );
            });
        });
}
