use std::io::{BufWriter, Write};

use anyhow::{bail, Context, Result};
use edumap::{AppState, Cursor, Fips, HoverEvent, HoverTarget, Surface, TooltipState};

/// One line of a hover script.
#[derive(Debug, PartialEq)]
enum Step {
    /// Deliver an event directly to a tracked element.
    Event(HoverEvent),
    /// Move the pointer and let hit testing decide which elements are entered or left.
    Move(Surface, Cursor),
    /// Pointer leaves the page.
    Leave,
}

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::HoverArgs) -> Result<()> {
    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("[hover] Failed to read script {}", args.script.display()))?;

    let mut app = super::load_app(&args.source)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    replay(&mut app, &script, &mut out)?;
    out.flush()?;
    Ok(())
}

fn replay<W: Write>(app: &mut AppState, script: &str, out: &mut W) -> Result<()> {
    let mut last = Cursor::default();

    for (i, line) in script.lines().enumerate() {
        let Some(step) = parse_line(line).with_context(|| format!("[hover] line {}", i + 1))? else { continue };

        let states = match step {
            Step::Event(event) => {
                last = event.cursor;
                app.hover(&event).map(|state| vec![state.clone()])
            }
            Step::Move(surface, cursor) => {
                last = cursor;
                app.move_pointer(surface, cursor)
            }
            Step::Leave => app.leave_pointer(last),
        };

        match states {
            Ok(states) => write_states(out, &states)?,
            // Lookup failures leave the tooltip untouched; keep replaying.
            Err(err) => tracing::warn!(line = i + 1, "{err}"),
        }
    }
    Ok(())
}

fn write_states<W: Write>(out: &mut W, states: &[TooltipState]) -> Result<()> {
    for state in states {
        serde_json::to_writer(&mut *out, state)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Parse a script line. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> Result<Option<Step>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() { return Ok(None) }

    let words = line.split_whitespace().collect::<Vec<_>>();
    let step = match words.as_slice() {
        ["leave"] => Step::Leave,
        ["move", surface, x, y] => {
            let surface = match *surface {
                "map" => Surface::Map,
                "legend" => Surface::Legend,
                other => bail!("unknown surface '{other}', expected 'map' or 'legend'"),
            };
            Step::Move(surface, cursor(x, y)?)
        }
        [kind @ ("over" | "out"), element, id, x, y] => {
            let target = match *element {
                "county" => HoverTarget::County { fips: Fips(id.parse().with_context(|| format!("bad FIPS code '{id}'"))?) },
                "legend" => HoverTarget::Legend { threshold: id.parse().with_context(|| format!("bad threshold '{id}'"))? },
                other => bail!("unknown element '{other}', expected 'county' or 'legend'"),
            };
            let cursor = cursor(x, y)?;
            Step::Event(if *kind == "over" { HoverEvent::over(target, cursor) } else { HoverEvent::out(target, cursor) })
        }
        _ => bail!("unrecognized hover step '{line}'"),
    };
    Ok(Some(step))
}

fn cursor(x: &str, y: &str) -> Result<Cursor> {
    let x = x.parse().with_context(|| format!("bad x coordinate '{x}'"))?;
    let y = y.parse().with_context(|| format!("bad y coordinate '{y}'"))?;
    Ok(Cursor::new(x, y))
}
