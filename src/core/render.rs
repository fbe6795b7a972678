// pwaicons - core/render.rs
//
// Icon renderer: a pure function from icon size to SVG markup.
// Core layer: no I/O, no logging.
//
// Layout (all proportional to the size `s`):
//   - rounded background square, rx = s // 8, diagonal green gradient
//   - document glyph group translated to (0.2s, 0.15s):
//       page, header bar, three body bars, circular "AI" badge
//   - large "F" letter centred at (0.5s, 0.9s)
//
// Radii, bar heights and font sizes use floor division; every other
// coordinate is a double-precision product formatted by `Scaled`.

use crate::core::model::{IconDocument, IconSize};
use crate::util::constants;
use crate::util::error::IconError;
use std::fmt;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A two-stop diagonal linear gradient.
struct Gradient {
    id: &'static str,
    start: &'static str,
    end: &'static str,
}

const BACKGROUND: Gradient = Gradient {
    id: "grad1",
    start: constants::BACKGROUND_GRADIENT_START,
    end: constants::BACKGROUND_GRADIENT_END,
};

const ACCENT: Gradient = Gradient {
    id: "grad2",
    start: constants::ACCENT_GRADIENT_START,
    end: constants::ACCENT_GRADIENT_END,
};

/// A horizontal "text line" inside the document glyph.
struct Bar {
    y: f64,
    width: f64,
    /// Height is `size / height_divisor` (floor).
    height_divisor: u32,
    accent: bool,
}

/// Header bar followed by the body bars, top to bottom.
const BARS: [Bar; 4] = [
    Bar { y: 0.12, width: 0.44, height_divisor: 25, accent: true },
    Bar { y: 0.2, width: 0.35, height_divisor: 30, accent: false },
    Bar { y: 0.26, width: 0.4, height_divisor: 30, accent: false },
    Bar { y: 0.32, width: 0.3, height_divisor: 30, accent: false },
];

/// Left inset of every bar within the document glyph.
const BAR_X: f64 = 0.08;

/// Render an icon for a raw integer size.
///
/// Zero, negative, and oversized values fail with `InvalidArgument`.
pub fn render(size: i64) -> Result<IconDocument, IconError> {
    let size = IconSize::new(size)?;
    Ok(render_icon(size))
}

/// Render an icon for an already validated size.
pub fn render_icon(size: IconSize) -> IconDocument {
    IconDocument::new(size, Markup { size }.to_string())
}

/// Display adapter that writes the full SVG document.
struct Markup {
    size: IconSize,
}

impl Markup {
    fn write_gradient(&self, f: &mut fmt::Formatter<'_>, g: &Gradient) -> fmt::Result {
        writeln!(
            f,
            r#"        <linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="100%">"#,
            g.id
        )?;
        writeln!(
            f,
            r#"            <stop offset="0%" style="stop-color:{};stop-opacity:1" />"#,
            g.start
        )?;
        writeln!(
            f,
            r#"            <stop offset="100%" style="stop-color:{};stop-opacity:1" />"#,
            g.end
        )?;
        writeln!(f, "        </linearGradient>")
    }

    fn write_document_glyph(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.size;
        writeln!(
            f,
            r#"    <g transform="translate({},{})">"#,
            s.scale(0.2),
            s.scale(0.15)
        )?;
        writeln!(
            f,
            r#"        <rect width="{}" height="{}" rx="{}" fill="white" fill-opacity="0.95"/>"#,
            s.scale(0.6),
            s.scale(0.7),
            s.floor_div(20)
        )?;
        for bar in &BARS {
            let fill = if bar.accent {
                format!("url(#{})", ACCENT.id)
            } else {
                constants::BODY_BAR_FILL.to_string()
            };
            writeln!(
                f,
                r#"        <rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
                s.scale(BAR_X),
                s.scale(bar.y),
                s.scale(bar.width),
                s.floor_div(bar.height_divisor)
            )?;
        }
        writeln!(
            f,
            r#"        <circle cx="{}" cy="{}" r="{}" fill="url(#{})"/>"#,
            s.scale(0.45),
            s.scale(0.45),
            s.scale(0.08),
            ACCENT.id
        )?;
        writeln!(
            f,
            r#"        <text x="{}" y="{}" text-anchor="middle" fill="white" font-family="{}" font-size="{}" font-weight="bold">{}</text>"#,
            s.scale(0.45),
            s.scale(0.48),
            constants::GLYPH_FONT_FAMILY,
            s.floor_div(10),
            constants::BADGE_TEXT
        )?;
        writeln!(f, "    </g>")
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.size;
        writeln!(
            f,
            r#"<svg width="{s}" height="{s}" viewBox="0 0 {s} {s}" xmlns="{SVG_NAMESPACE}">"#
        )?;

        writeln!(f, "    <defs>")?;
        self.write_gradient(f, &BACKGROUND)?;
        self.write_gradient(f, &ACCENT)?;
        writeln!(f, "    </defs>")?;

        writeln!(
            f,
            r#"    <rect width="{s}" height="{s}" rx="{}" fill="url(#{})"/>"#,
            s.floor_div(8),
            BACKGROUND.id
        )?;

        self.write_document_glyph(f)?;

        writeln!(
            f,
            r#"    <text x="{}" y="{}" text-anchor="middle" fill="white" font-family="{}" font-size="{}" font-weight="bold">{}</text>"#,
            s.scale(0.5),
            s.scale(0.9),
            constants::GLYPH_FONT_FAMILY,
            s.floor_div(6),
            constants::LETTER_TEXT
        )?;
        // No trailing newline after the root element.
        f.write_str("</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Extract the value of the first `name="..."` attribute following `anchor`.
    fn attr_after<'a>(doc: &'a str, anchor: &str, name: &str) -> &'a str {
        let start = doc.find(anchor).expect("anchor present");
        let rest = &doc[start..];
        let key = format!(" {name}=\"");
        let at = rest.find(&key).expect("attribute present") + key.len();
        let end = rest[at..].find('"').expect("closing quote");
        &rest[at..at + end]
    }

    #[test]
    fn canvas_matches_size_for_every_default() {
        for size in constants::DEFAULT_ICON_SIZES {
            let doc = render(i64::from(size)).unwrap();
            let expected = format!(r#"width="{size}" height="{size}""#);
            assert!(doc.as_str().starts_with("<svg "), "size {size}");
            assert!(doc.as_str().contains(&expected), "size {size}");
            assert_eq!(
                attr_after(doc.as_str(), r#"<rect width="#, "rx"),
                (size / 8).to_string(),
                "corner radius for {size}"
            );
        }
    }

    #[test]
    fn render_72_has_expected_geometry() {
        let doc = render(72).unwrap();
        let svg = doc.as_str();
        assert!(svg.contains(r#"width="72" height="72""#));
        assert!(svg.contains(r#"viewBox="0 0 72 72""#));
        assert!(svg.contains(r#"rx="9" fill="url(#grad1)""#));

        let start = svg.find("translate(").unwrap() + "translate(".len();
        let end = svg[start..].find(')').unwrap();
        let coords: Vec<f64> = svg[start..start + end]
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert!((coords[0] - 14.4).abs() < 1e-9);
        assert!((coords[1] - 10.8).abs() < 1e-9);

        assert!(svg.contains(">AI</text>"));
        assert!(svg.contains(">F</text>"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn document_glyph_dimensions_are_proportional() {
        let svg = render(512).unwrap().into_string();
        assert!(svg.contains(r#"translate(102.4,76.8)"#));
        // Page: 0.6s x 0.7s, rx = s // 20.
        assert!(svg.contains(r#"<rect width="307.2" height="358.4" rx="25" fill="white""#));
        // Header bar height s // 25, body bars s // 30.
        assert!(svg.contains(r#"y="61.44" width="225.28" height="20" fill="url(#grad2)""#));
        assert_eq!(svg.matches(r##"height="17" fill="#666""##).count(), 3);
        // Badge and letter.
        assert!(svg.contains(r#"<circle cx="230.4" cy="230.4" r="40.96" fill="url(#grad2)"/>"#));
        assert!(svg.contains(r#"font-size="51" font-weight="bold">AI</text>"#));
        assert!(svg.contains(r#"<text x="256.0" y="460.8""#));
        assert!(svg.contains(r#"font-size="85" font-weight="bold">F</text>"#));
    }

    #[test]
    fn gradients_use_fixed_palette() {
        let svg = render(96).unwrap().into_string();
        assert!(svg.contains(r#"<linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%">"#));
        assert!(svg.contains("stop-color:#4CAF50"));
        assert!(svg.contains("stop-color:#81C784"));
        assert!(svg.contains("stop-color:#2E7D32"));
    }

    #[test]
    fn render_is_deterministic() {
        for size in [72, 144, 384] {
            assert_eq!(render(size).unwrap(), render(size).unwrap());
        }
    }

    #[test]
    fn render_rejects_non_positive_sizes() {
        for bad in [0, -5, -1] {
            let err = render(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "size {bad}: {err}");
        }
    }

    #[test]
    fn document_reports_svg_content_type() {
        let doc = render(128).unwrap();
        assert_eq!(doc.content_type(), "image/svg+xml");
        assert_eq!(doc.file_name(), "icon-128x128.svg");
        assert_eq!(doc.size().px(), 128);
    }
}
