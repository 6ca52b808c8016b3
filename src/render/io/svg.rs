use std::io::Write;

use anyhow::Result;

use crate::{io::svg::*, render::Scene};

impl Scene {
    /// Write the map as a standalone SVG document, with the legend row nested below it.
    pub fn write_svg<W: Write>(&self, writer: &mut W) -> Result<()> {
        let width = self.width.max(self.legend_width);
        let height = self.height + self.legend_height;

        write_svg_header(writer, width, height)?;
        write_svg_styles(writer, &self.state_stroke)?;
        writeln!(writer, "<title>{}</title>", escape(&self.title))?;
        writeln!(writer, "<desc>{}</desc>", escape(&self.description))?;

        writeln!(writer, r#"<g id="map">"#)?;
        self.write_layers(writer)?;
        writeln!(writer, "</g>")?;

        write_svg_open(writer, &format!(r#"id="legend" x="0" y="{}""#, self.height), self.legend_width, self.legend_height)?;
        self.write_legend_items(writer)?;
        write_svg_footer(writer)?;

        write_svg_footer(writer)?;
        Ok(())
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_svg(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Nation, states and counties, bottom-to-top.
    pub(crate) fn write_layers<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, r#"<g id="nation">"#)?;
        for shape in &self.nation {
            writeln!(writer, r#"<path fill="{}" d="{}"/>"#, escape(&shape.fill.to_string()), shape.d)?;
        }
        writeln!(writer, "</g>")?;

        writeln!(writer, r#"<g id="states">"#)?;
        for shape in &self.states {
            writeln!(writer, r#"<path class="state" fill="{}" d="{}"/>"#, escape(&shape.fill.to_string()), shape.d)?;
        }
        writeln!(writer, "</g>")?;

        writeln!(writer, r#"<g id="counties">"#)?;
        for county in &self.counties {
            writeln!(
                writer,
                r#"<path class="county" data-fips="{}" data-education="{}" fill="{}" d="{}"/>"#,
                county.fips, county.education, county.fill, county.d,
            )?;
        }
        writeln!(writer, "</g>")?;
        Ok(())
    }

    pub(crate) fn write_legend_items<W: Write>(&self, writer: &mut W) -> Result<()> {
        for swatch in &self.legend {
            writeln!(
                writer,
                r#"<rect class="legend-item" x="{}" y="{}" width="{size}" height="{size}" fill="{}" data-legend="{}"/>"#,
                swatch.x, swatch.y, swatch.fill, swatch.label(), size = swatch.size,
            )?;
        }
        Ok(())
    }
}
