//! SVG backend for headless export.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::Context;

use crate::ui::{layout::CANVAS_SIZE, scene::DrawCommand};

pub fn render_svg(commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}">"#
    );

    for command in commands {
        let _ = match command {
            DrawCommand::Label {
                at,
                text,
                font_size,
            } => writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{font_size}px">{}</text>"#,
                at[0],
                at[1],
                escape_text(text)
            ),
            DrawCommand::Cell {
                id,
                center,
                radius,
                fill,
                opacity,
            } => writeln!(
                out,
                r#"  <circle id="{id}" cx="{}" cy="{}" r="{radius}" fill="{}" opacity="{opacity}"/>"#,
                center[0],
                center[1],
                fill.hex()
            ),
            DrawCommand::Ring {
                center,
                radius,
                stroke,
                stroke_width,
                opacity,
            } => writeln!(
                out,
                r#"  <circle id="highlightCircle" cx="{}" cy="{}" r="{radius}" fill="none" stroke="{}" stroke-width="{stroke_width}" opacity="{opacity}"/>"#,
                center[0],
                center[1],
                stroke.hex()
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

pub fn write_svg(path: &Path, commands: &[DrawCommand]) -> anyhow::Result<()> {
    fs::write(path, render_svg(commands))
        .with_context(|| format!("failed to write svg to '{}'", path.display()))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[path = "tests/svg_tests.rs"]
mod tests;
