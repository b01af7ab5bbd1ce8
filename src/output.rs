//! Result formatting for ranked address matches.

use crate::query::SearchHit;
use serde_json::json;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print ranked hits with a count banner, one record per line
pub fn print_hits(hits: &[SearchHit<'_>], limit: Option<usize>, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let shown = limit.unwrap_or(hits.len()).min(hits.len());

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(stdout, "----- {} hits -----", hits.len())?;
    stdout.reset()?;

    for hit in &hits[..shown] {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>3}", hit.score)?;
        stdout.reset()?;
        writeln!(stdout, "  {}", hit.record.text())?;
    }

    if shown < hits.len() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "... and {} more", hits.len() - shown)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print hits as JSON lines, one object per record
pub fn print_hits_json(hits: &[SearchHit<'_>], limit: Option<usize>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let shown = limit.unwrap_or(hits.len()).min(hits.len());
    for hit in &hits[..shown] {
        let line = json!({
            "pos": hit.pos,
            "score": hit.score,
            "record": hit.record.text(),
        });
        writeln!(out, "{line}")?;
    }

    Ok(())
}
