use crate::{chart::svg::SvgElement, foundation::core::Point};

/// Hover content attached to one chart mark.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Tooltip {
    /// Bold first line (usually the movie or genre name).
    pub heading: String,
    /// Detail lines below the heading.
    pub lines: Vec<String>,
}

impl Tooltip {
    /// Tooltip with only a heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    /// Append a detail line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Native SVG hover text (`<title>`), one line per entry.
    pub fn to_title_element(&self) -> SvgElement {
        let mut text = self.heading.clone();
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        SvgElement::new("title").text(text)
    }

    /// HTML fragment for an overlay box: bold heading, `<br>` separated lines.
    pub fn to_html(&self) -> String {
        let mut out = format!("<b>{}</b>", html_escape(&self.heading));
        for line in &self.lines {
            out.push_str("<br>");
            out.push_str(&html_escape(line));
        }
        out
    }
}

/// The single floating tooltip box a scene shows while a mark is hovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipOverlay {
    visible: bool,
    position: Point,
    content: Option<Tooltip>,
}

impl TooltipOverlay {
    /// Offset from the pointer to the overlay's top-left corner.
    pub const POINTER_OFFSET: f64 = 10.0;

    /// Show `content` next to `pointer`.
    pub fn show(&mut self, pointer: Point, content: Tooltip) {
        self.visible = true;
        self.position = Point::new(
            pointer.x + Self::POINTER_OFFSET,
            pointer.y + Self::POINTER_OFFSET,
        );
        self.content = Some(content);
    }

    /// Hide the overlay. The last content is kept for the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the overlay is displayed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Top-left corner in page coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Content currently (or last) shown.
    pub fn content(&self) -> Option<&Tooltip> {
        self.content.as_ref()
    }

    /// Inline CSS for the overlay box.
    pub fn style(&self) -> String {
        if !self.visible {
            return "display: none".to_string();
        }
        format!(
            "display: block; left: {}px; top: {}px",
            self.position.x, self.position.y
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
#[path = "../../tests/unit/chart/tooltip.rs"]
mod tests;
