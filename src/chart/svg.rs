//! Minimal retained SVG tree with deterministic serialization.

use std::fmt::Write as _;

/// Child of an [`SvgElement`].
#[derive(Clone, Debug, PartialEq)]
pub enum SvgNode {
    /// Nested element.
    Element(SvgElement),
    /// Escaped character data.
    Text(String),
}

/// One SVG element with ordered attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<SvgNode>,
}

impl SvgElement {
    /// Empty element named `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set (or replace) an attribute.
    pub fn attr(mut self, name: &str, value: impl std::fmt::Display) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a numeric attribute using [`fmt_num`].
    pub fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    /// Shorthand for `attr("class", ..)`.
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Append a child element.
    pub fn child(mut self, child: SvgElement) -> Self {
        self.push(child);
        self
    }

    /// Append character data.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    /// In-place attribute setter.
    pub fn set_attr(&mut self, name: &str, value: impl std::fmt::Display) {
        let value = value.to_string();
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// In-place child append.
    pub fn push(&mut self, child: SvgElement) {
        self.children.push(SvgNode::Element(child));
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// True when the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|c| match c {
            SvgNode::Element(e) => Some(e),
            SvgNode::Text(_) => None,
        })
    }

    /// Concatenated character data of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                SvgNode::Text(t) => out.push_str(t),
                SvgNode::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// Depth-first search over descendants (excluding `self`).
    pub fn descendants_where<'a>(&'a self, pred: &dyn Fn(&SvgElement) -> bool) -> Vec<&'a SvgElement> {
        let mut out = Vec::new();
        self.collect_where(pred, &mut out);
        out
    }

    fn collect_where<'a>(&'a self, pred: &dyn Fn(&SvgElement) -> bool, out: &mut Vec<&'a SvgElement>) {
        for e in self.elements() {
            if pred(e) {
                out.push(e);
            }
            e.collect_where(pred, out);
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {k}=\"{}\"", escape(v));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        let text_only = self.children.iter().all(|c| matches!(c, SvgNode::Text(_)));
        if text_only {
            out.push('>');
            out.push_str(&escape(&self.text_content()));
            let _ = writeln!(out, "</{}>", self.tag);
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                SvgNode::Element(e) => e.write(out, depth + 1),
                SvgNode::Text(t) => {
                    let _ = writeln!(out, "{indent}  {}", escape(t));
                }
            }
        }
        let _ = writeln!(out, "{indent}</{}>", self.tag);
    }
}

/// Root `<svg>` element with a fixed pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    root: SvgElement,
}

impl SvgDocument {
    /// Empty document of `width` × `height` pixels.
    pub fn new(width: f64, height: f64) -> Self {
        let root = SvgElement::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .num("width", width)
            .num("height", height)
            .attr(
                "viewBox",
                format!("0 0 {} {}", fmt_num(width), fmt_num(height)),
            );
        Self {
            width,
            height,
            root,
        }
    }

    /// Document width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Document height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The `<svg>` element.
    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    /// Append a top-level element.
    pub fn push(&mut self, child: SvgElement) {
        self.root.push(child);
    }

    /// Serialize with an XML declaration.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.root.write(&mut out, 0);
        out
    }
}

/// `translate(x,y)` transform value.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", fmt_num(x), fmt_num(y))
}

/// Compact attribute number: up to three decimals, no trailing zeros, non-finite as `0`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;
