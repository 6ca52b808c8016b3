use std::io::Write;

use anyhow::Result;

use crate::{io::svg::*, render::Scene, tooltip::TooltipState};

impl Scene {
    /// Write a standalone HTML page: title, description, the map inside
    /// `#container`, the `#legend` row and the `#tooltip` element.
    ///
    /// The page is a static snapshot with no script: `#tooltip` shows the
    /// given state as-is. Hover behavior is driven through
    /// [`TooltipController`](crate::TooltipController), e.g. by the `hover` command.
    pub fn write_html<W: Write>(&self, writer: &mut W, tooltip: &TooltipState) -> Result<()> {
        writeln!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
    body {{ font-family: sans-serif; text-align: center; }}
    #container, #legend {{ display: block; margin: 0 auto; }}
    #tooltip {{ position: absolute; padding: 6px; background: rgba(255, 255, 255, 0.9); border: 1px solid #111827; pointer-events: none; }}
</style>
</head>
<body>
<h1 id="title">{title}</h1>
<p id="description">{description}</p>
<div id="container">"#,
            title = escape(&self.title),
            description = escape(&self.description),
        )?;

        write_svg_open(writer, r#"id="map""#, self.width, self.height)?;
        write_svg_styles(writer, &self.state_stroke)?;
        self.write_layers(writer)?;
        write_svg_footer(writer)?;
        writeln!(writer, "</div>")?;

        write_svg_open(writer, r#"id="legend""#, self.legend_width, self.legend_height)?;
        self.write_legend_items(writer)?;
        write_svg_footer(writer)?;

        write_tooltip(writer, tooltip)?;
        writeln!(writer, "</body>\n</html>")?;
        Ok(())
    }

    pub fn to_html_string(&self, tooltip: &TooltipState) -> Result<String> {
        let mut out = Vec::new();
        self.write_html(&mut out, tooltip)?;
        Ok(String::from_utf8(out)?)
    }
}

fn write_tooltip<W: Write>(writer: &mut W, tooltip: &TooltipState) -> Result<()> {
    let education = tooltip.education
        .map(|e| format!(r#" data-education="{e}""#))
        .unwrap_or_default();
    writeln!(
        writer,
        r#"<div id="tooltip"{education} style="visibility: {}; left: {}px; top: {}px; width: {}px">{}</div>"#,
        if tooltip.visible { "visible" } else { "hidden" },
        tooltip.left, tooltip.top, tooltip.width,
        escape(&tooltip.text),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::TooltipContent;

    fn scene() -> Scene {
        Scene {
            width: 900.0,
            height: 600.0,
            title: "United States Educational Attainment".into(),
            description: "Adults with a bachelor's degree".into(),
            state_stroke: "#111827".into(),
            nation: vec![],
            states: vec![],
            counties: vec![],
            legend: vec![],
            legend_width: 235.0,
            legend_height: 50.0,
        }
    }

    #[test]
    fn default_tooltip_is_hidden() {
        let html = scene().to_html_string(&TooltipState::default()).unwrap();
        assert!(html.contains(r#"<div id="tooltip" style="visibility: hidden;"#));
        assert!(html.contains("bachelor&#39;s"));
    }

    #[test]
    fn snapshot_reflects_the_given_tooltip_state() {
        let tooltip = TooltipState {
            visible: true,
            content: TooltipContent::County,
            left: 210.0,
            top: 310.0,
            width: 100.0,
            text: "Autauga County, AL, Education: 21.9 %".into(),
            education: Some(21.9),
        };
        let html = scene().to_html_string(&tooltip).unwrap();

        assert!(html.contains(r#"<div id="tooltip" data-education="21.9" style="visibility: visible; left: 210px; top: 310px; width: 100px">Autauga County, AL, Education: 21.9 %</div>"#));
        assert!(!html.contains("<script"));
    }
}
