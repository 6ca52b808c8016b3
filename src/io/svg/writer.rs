//! SVG writing operations.

use std::{borrow::Cow, io::Write};

use anyhow::Result;

/// Write the SVG header, including the XML declaration and opening <svg> tag.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    write_svg_open(writer, "", width, height)
}

/// Write an opening <svg> tag; `attrs` is inserted verbatim (e.g. `id="legend" y="600"`).
pub(crate) fn write_svg_open<W: Write>(writer: &mut W, attrs: &str, width: f64, height: f64) -> Result<()> {
    let attrs = if attrs.is_empty() { String::new() } else { format!(" {attrs}") };
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"{attrs} width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##)?;
    Ok(())
}

/// Write SVG styles for map features.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W, state_stroke: &str) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .state {{ stroke: {stroke}; stroke-width: 0.5; }}
    .county {{ stroke: none; }}
    .county:hover, .legend-item:hover {{ stroke: #111827; stroke-width: 1; }}
</style>
</defs>"##, stroke = escape(state_stroke))?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for use in XML/HTML content and attribute values.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) { return Cow::Borrowed(text) }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
