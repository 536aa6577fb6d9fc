//! SVG materialization of a [`RenderFrame`].
//!
//! Produces a standalone `<svg>` document string with a
//! `viewBox="0 0 width height"` root. This is a pure function with no I/O;
//! the caller decides where the markup goes.

use std::fmt::Write;

use crate::core::PathCommand;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, StrokeStyle, TextPrimitive};

/// Escape the five XML special characters for safe embedding in element
/// text content and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1_000.0).round() / 1_000.0;
    format!("{rounded}")
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    let _ = write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        xml_escape(&stroke.color),
        fmt_num(stroke.width),
    );
    if stroke.opacity != 1.0 {
        let _ = write!(out, r#" stroke-opacity="{}""#, fmt_num(stroke.opacity));
    }
    if stroke.linecap != "butt" {
        let _ = write!(out, r#" stroke-linecap="{}""#, xml_escape(&stroke.linecap));
    }
    if stroke.linejoin != "miter" {
        let _ = write!(
            out,
            r#" stroke-linejoin="{}""#,
            xml_escape(&stroke.linejoin)
        );
    }
}

fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                let _ = write!(d, "M{},{}", fmt_num(x), fmt_num(y));
            }
            PathCommand::LineTo { x, y } => {
                let _ = write!(d, "L{},{}", fmt_num(x), fmt_num(y));
            }
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_num(x1),
                    fmt_num(y1),
                    fmt_num(x2),
                    fmt_num(y2),
                    fmt_num(x),
                    fmt_num(y)
                );
            }
        }
    }
    d
}

fn write_text_element(out: &mut String, text: &TextPrimitive) {
    let _ = write!(
        out,
        r#"  <text x="{}" y="{}""#,
        fmt_num(text.x),
        fmt_num(text.y)
    );
    if text.dy_em != 0.0 {
        let _ = write!(out, r#" dy="{}em""#, fmt_num(text.dy_em));
    }
    let _ = writeln!(
        out,
        r#" font-family="sans-serif" font-size="{}" fill="{}" text-anchor="{}">{}</text>"#,
        fmt_num(text.font_size_px),
        xml_escape(&text.color),
        text.anchor.as_svg(),
        xml_escape(&text.text)
    );
}

/// Serializes a validated frame into a standalone SVG document string.
pub fn frame_to_svg(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;

    let width = frame.viewport.width;
    let height = frame.viewport.height;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" style="max-width: 100%; height: auto;">"#,
    );

    for line in &frame.lines {
        let _ = write!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}""#,
            fmt_num(line.x1),
            fmt_num(line.y1),
            fmt_num(line.x2),
            fmt_num(line.y2)
        );
        write_stroke_attrs(&mut out, &line.stroke);
        let _ = writeln!(out, "/>");
    }

    for path in &frame.paths {
        let mut element = String::from(r#"  <path fill="none""#);
        write_stroke_attrs(&mut element, &path.stroke);
        let _ = writeln!(out, r#"{element} d="{}"/>"#, path_data(&path.commands));
    }

    for text in &frame.texts {
        write_text_element(&mut out, text);
    }

    out.push_str("</svg>\n");
    Ok(out)
}

/// Renderer that keeps the most recently materialized SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent output, if `render` has succeeded at least once.
    #[must_use]
    pub fn last_svg(&self) -> Option<&str> {
        self.last_svg.as_deref()
    }

    /// Consumes the renderer, returning the last output.
    #[must_use]
    pub fn into_svg(self) -> Option<String> {
        self.last_svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.last_svg = Some(frame_to_svg(frame)?);
        Ok(())
    }
}
