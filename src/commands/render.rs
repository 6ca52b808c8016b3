use std::path::Path;

use anyhow::{bail, Result};
use edumap::DocumentFormat;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    if args.output == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }
    let format = args.format.unwrap_or_else(|| infer_format(&args.output));

    let app = super::load_app(&args.source)?;
    tracing::info!(
        counties = app.scene.counties.len(),
        legend = app.scene.legend.len(),
        "[render] writing {:?} to {}", format, args.output.display()
    );
    app.scene.save(&args.output, format, args.force)?;

    if cli.verbose > 0 {
        eprintln!("[render] wrote {}", args.output.display());
    }
    Ok(())
}

fn infer_format(path: &Path) -> DocumentFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => DocumentFormat::Svg,
        _ => DocumentFormat::Html,
    }
}
