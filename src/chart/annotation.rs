//! Callout annotations: a circled subject, a connector and a text note.

use crate::{
    chart::svg::{SvgElement, translate},
    foundation::core::{Point, Rgb8, Vec2},
};

const CHAR_WIDTH_PX: f64 = 6.0;
const LINE_HEIGHT_PX: f64 = 14.0;
const DEFAULT_WRAP_PX: f64 = 120.0;
const DEFAULT_COLOR: Rgb8 = Rgb8::new(0x33, 0x33, 0x33);

/// A labeled callout pinned to a data point.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Annotation {
    /// Bold first line of the note.
    pub title: String,
    /// Body text, word-wrapped at [`Annotation::wrap`].
    pub label: String,
    /// Subject position in plot coordinates.
    pub at: Point,
    /// Note position relative to the subject.
    pub offset: Vec2,
    /// Radius of the circle drawn around the subject (0 for none).
    pub subject_radius: f64,
    /// Gap between the mark and the subject circle.
    pub radius_padding: f64,
    /// Maximum note width in pixels.
    pub wrap: f64,
    /// Stroke and text color.
    pub color: Rgb8,
}

impl Annotation {
    /// Annotation at `at` with the note directly on the subject.
    pub fn new(title: impl Into<String>, label: impl Into<String>, at: Point) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            at,
            offset: Vec2::ZERO,
            subject_radius: 0.0,
            radius_padding: 0.0,
            wrap: DEFAULT_WRAP_PX,
            color: DEFAULT_COLOR,
        }
    }

    /// Move the note by `(dx, dy)` from the subject.
    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = Vec2::new(dx, dy);
        self
    }

    /// Circle the subject with `radius + padding`.
    pub fn subject(mut self, radius: f64, padding: f64) -> Self {
        self.subject_radius = radius.max(0.0);
        self.radius_padding = padding.max(0.0);
        self
    }

    /// Wrap the label at `px` pixels.
    pub fn wrap(mut self, px: f64) -> Self {
        self.wrap = px;
        self
    }

    /// Override the color.
    pub fn color(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }

    /// Where the note is anchored.
    pub fn note_position(&self) -> Point {
        self.at + self.offset
    }

    /// Connector from the subject circle's edge to the note, if the note is displaced.
    pub fn connector(&self) -> Option<(Point, Point)> {
        let len = self.offset.hypot();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        let r = self.subject_radius + self.radius_padding;
        if r >= len {
            return None;
        }
        let start = self.at + self.offset * (r / len);
        Some((start, self.note_position()))
    }

    /// Title and label lines after wrapping.
    pub fn lines(&self) -> (Vec<String>, Vec<String>) {
        let max_chars = ((self.wrap / CHAR_WIDTH_PX).floor() as usize).max(1);
        (
            wrap_text(&self.title, max_chars),
            wrap_text(&self.label, max_chars),
        )
    }

    /// SVG group for this annotation.
    pub fn to_svg(&self) -> SvgElement {
        let color = self.color.to_hex();
        let mut group = SvgElement::new("g").class("annotation");

        let r = self.subject_radius + self.radius_padding;
        if r > 0.0 {
            group.push(
                SvgElement::new("circle")
                    .class("annotation-subject")
                    .num("cx", self.at.x)
                    .num("cy", self.at.y)
                    .num("r", r)
                    .attr("fill", "none")
                    .attr("stroke", &color),
            );
        }

        if let Some((from, to)) = self.connector() {
            group.push(
                SvgElement::new("line")
                    .class("annotation-connector")
                    .num("x1", from.x)
                    .num("y1", from.y)
                    .num("x2", to.x)
                    .num("y2", to.y)
                    .attr("stroke", &color),
            );
        }

        let (title_lines, label_lines) = self.lines();
        let widest = title_lines
            .iter()
            .chain(&label_lines)
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let note_width = (widest as f64 * CHAR_WIDTH_PX).min(self.wrap);

        // Notes above the subject grow upwards from the note line; below, downwards.
        let total = (title_lines.len() + label_lines.len()) as f64;
        let first_y = if self.offset.y < 0.0 {
            -(total - 1.0) * LINE_HEIGHT_PX - 4.0
        } else {
            LINE_HEIGHT_PX
        };

        let note = self.note_position();
        let mut text = SvgElement::new("text")
            .class("annotation-note")
            .attr("font-size", 11)
            .attr("font-family", "sans-serif")
            .attr("fill", &color);
        let all = title_lines
            .iter()
            .map(|l| (l, true))
            .chain(label_lines.iter().map(|l| (l, false)));
        for (i, (line, bold)) in all.enumerate() {
            let mut span = SvgElement::new("tspan")
                .num("x", 0.0)
                .num("y", first_y + i as f64 * LINE_HEIGHT_PX);
            if bold {
                span = span.attr("font-weight", "bold");
            }
            text.push(span.text(line.clone()));
        }

        group.push(
            SvgElement::new("g")
                .class("annotation-note-group")
                .attr("transform", translate(note.x, note.y))
                .child(
                    SvgElement::new("line")
                        .class("annotation-note-line")
                        .num("x2", note_width)
                        .attr("stroke", &color),
                )
                .child(text),
        );
        group
    }
}

/// Greedy word wrap at `max_chars` per line. Whitespace runs collapse; overlong
/// words get their own line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/chart/annotation.rs"]
mod tests;
