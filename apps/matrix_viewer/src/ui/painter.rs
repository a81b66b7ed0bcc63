//! egui backend for draw commands.

use eframe::egui;

use crate::ui::scene::{DrawCommand, Rgb, LABEL_COLOR};

fn color(rgb: Rgb, opacity: f32) -> egui::Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(rgb.0, rgb.1, rgb.2, alpha)
}

fn at(origin: egui::Pos2, point: [f32; 2]) -> egui::Pos2 {
    origin + egui::vec2(point[0], point[1])
}

/// Paints `commands` with canvas coordinates offset by `origin`.
pub fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Label {
                at: point,
                text,
                font_size,
            } => {
                painter.text(
                    at(origin, *point),
                    egui::Align2::LEFT_BOTTOM,
                    text,
                    egui::FontId::proportional(*font_size),
                    color(LABEL_COLOR, 1.0),
                );
            }
            DrawCommand::Cell {
                center,
                radius,
                fill,
                opacity,
                ..
            } => {
                painter.circle_filled(at(origin, *center), *radius, color(*fill, *opacity));
            }
            DrawCommand::Ring {
                center,
                radius,
                stroke,
                stroke_width,
                opacity,
            } => {
                painter.circle_stroke(
                    at(origin, *center),
                    *radius,
                    egui::Stroke::new(*stroke_width, color(*stroke, *opacity)),
                );
            }
        }
    }
}
