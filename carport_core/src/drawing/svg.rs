//! # SVG Primitives
//!
//! A minimal vector-graphics string builder: viewports, rectangles, lines,
//! polygons, dimension lines with arrow markers, and rotated text. No
//! domain knowledge lives here; the view renderers decide what to draw.
//!
//! Coordinates are written with a fixed two-decimal format so identical
//! drawing programs always produce byte-identical documents.

use std::fmt::Write as _;

/// An SVG document or nested viewport under construction.
///
/// A root canvas carries a percentage width and a `0 0 w h` view box so
/// consumers can embed the document directly. Nested canvases are placed
/// at an offset inside their parent and establish their own coordinate
/// system (used to map real-world cm 1:1 to user units).
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    buf: String,
}

impl SvgCanvas {
    /// Start a root document filling its container.
    pub fn root(view_box: &str) -> Self {
        let mut buf = String::new();
        let _ = write!(
            buf,
            r#"<svg version="1.1" x="0" y="0" width="100%" viewBox="{}" preserveAspectRatio="xMinYMin">"#,
            view_box
        );
        SvgCanvas { buf }
    }

    /// Start a nested viewport at (x, y) with its own coordinate frame.
    pub fn nested(x: u32, y: u32, width: u32, height: u32) -> Self {
        let mut buf = String::new();
        let _ = write!(
            buf,
            r#"<svg version="1.1" x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="xMinYMin">"#,
            x, y, width, height, width, height
        );
        SvgCanvas { buf }
    }

    /// Arrow marker definitions for dimension lines. Embedded so the
    /// document stays self-contained.
    pub fn arrow_defs(&mut self) {
        self.buf.push_str(concat!(
            "<defs>",
            r#"<marker id="beginArrow" markerWidth="12" markerHeight="12" refX="0" refY="6" orient="auto">"#,
            r#"<path d="M0,6 L12,0 L12,12 L0,6" style="fill: #000000;" /></marker>"#,
            r#"<marker id="endArrow" markerWidth="12" markerHeight="12" refX="12" refY="6" orient="auto">"#,
            r#"<path d="M0,0 L12,6 L0,12 L0,0" style="fill: #000000;" /></marker>"#,
            "</defs>",
        ));
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &str) {
        let _ = write!(
            self.buf,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" style="{}" />"#,
            x, y, width, height, style
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &str) {
        let _ = write!(
            self.buf,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" style="{}"/>"#,
            x1, y1, x2, y2, style
        );
    }

    pub fn polygon(&mut self, points: &[(f64, f64)], style: &str) {
        self.buf.push_str(r#"<polygon points=""#);
        for (i, (x, y)) in points.iter().enumerate() {
            if i > 0 {
                self.buf.push(' ');
            }
            let _ = write!(self.buf, "{:.2},{:.2}", x, y);
        }
        let _ = write!(self.buf, r#"" style="{}" />"#, style);
    }

    /// A dimension line with an arrow head at both ends.
    pub fn dimension_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let _ = write!(
            self.buf,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" style="stroke:#000000; marker-start: url(#beginArrow); marker-end: url(#endArrow);"/>"#,
            x1, y1, x2, y2
        );
    }

    /// Centered text, rotated around its anchor point (degrees).
    pub fn text(&mut self, x: f64, y: f64, rotation: f64, content: &str) {
        let _ = write!(
            self.buf,
            r#"<text style="text-anchor: middle" transform="translate({:.2},{:.2}) rotate({:.2})">{}</text>"#,
            x,
            y,
            rotation,
            escape(content)
        );
    }

    /// Embed a finished nested viewport.
    pub fn embed(&mut self, inner: SvgCanvas) {
        self.buf.push_str(&inner.finish());
    }

    /// Close the document and return the SVG string.
    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
