//! Terminal output for lookups and index statistics

use crate::index::{Index, IndexStats, Resolution, TableStats};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One resolved key, as emitted by `lookup --json`
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub key: &'a str,
    #[serde(flatten)]
    pub resolution: Resolution<'a>,
}

pub fn lookup_reports<'a>(index: &'a Index, keys: &'a [String]) -> Vec<LookupReport<'a>> {
    keys.iter()
        .map(|key| LookupReport {
            key: key.as_str(),
            resolution: index.resolve(key),
        })
        .collect()
}

fn color_choice(color: bool) -> ColorChoice {
    if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print how each key resolves, one per line
pub fn print_lookups(reports: &[LookupReport<'_>], color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color));
    let width = reports.iter().map(|r| r.key.len()).max().unwrap_or(0);

    for report in reports {
        write_lookup(&mut stdout, report, width)?;
    }

    Ok(())
}

fn write_lookup<W: WriteColor>(out: &mut W, report: &LookupReport<'_>, width: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{:width$}", report.key, width = width)?;
    out.reset()?;
    write!(out, "  ")?;

    match report.resolution {
        Resolution::Property(entry) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "property ")?;
            out.reset()?;
            write!(out, " {}", entry.name)?;
            write_canonical(out, &entry.options.canonical)?;
        }
        Resolution::Statement(entry) => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "statement")?;
            out.reset()?;
            write!(out, " {}: {};", entry.property, entry.value)?;
            write_canonical(out, &entry.options.canonical)?;
        }
        Resolution::Blocked => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "blocked")?;
            out.reset()?;
        }
        Resolution::Absent => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "not found")?;
            out.reset()?;
        }
    }

    writeln!(out)
}

fn write_canonical<W: WriteColor>(out: &mut W, canonical: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    write!(out, "  ({})", canonical)?;
    out.reset()
}

/// Print index statistics
pub fn print_stats(stats: &IndexStats, color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color));
    write_stats(&mut stdout, stats)
}

fn write_stats<W: WriteColor>(out: &mut W, stats: &IndexStats) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Index Statistics")?;
    out.reset()?;
    writeln!(out, "================")?;
    writeln!(out)?;

    write_table_stats(out, "Properties", &stats.properties)?;
    write_table_stats(out, "Statements", &stats.statements)?;

    writeln!(out, "Full properties:  {}", stats.full_properties)?;
    writeln!(out, "Total keys:       {}", stats.total_keys())?;
    Ok(())
}

fn write_table_stats<W: WriteColor>(out: &mut W, title: &str, stats: &TableStats) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    writeln!(out, "{}:", title)?;
    out.reset()?;
    writeln!(out, "  Shorthands:     {}", stats.primary)?;
    writeln!(out, "  Fuzzy keys:     {}", stats.fuzzy)?;
    writeln!(out, "  Blocked:        {}", stats.blocked)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{Definitions, PropertyDef, StatementDef};
    use termcolor::NoColor;

    fn sample() -> Index {
        Index::build(
            Definitions::new()
                .property(PropertyDef::new("bg", "background"))
                .statement(StatementDef::new("m0a", "margin", "0 auto")),
        )
    }

    fn render(reports: &[LookupReport<'_>]) -> String {
        let mut out = NoColor::new(Vec::new());
        for report in reports {
            write_lookup(&mut out, report, 3).unwrap();
        }
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_write_lookups() {
        let index = sample();
        let keys = vec![
            "bg".to_string(),
            "m0".to_string(),
            "p".to_string(),
            "zz".to_string(),
        ];
        let text = render(&lookup_reports(&index, &keys));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "bg   property  background  (bg)");
        assert_eq!(lines[1], "m0   statement margin: 0 auto;  (m0a)");
        assert_eq!(lines[2], "p    blocked");
        assert_eq!(lines[3], "zz   not found");
    }

    #[test]
    fn test_lookup_report_json() {
        let index = sample();
        let keys = vec!["ba".to_string(), "b".to_string()];
        let reports = lookup_reports(&index, &keys);
        let value = serde_json::to_value(&reports).unwrap();

        assert_eq!(value[0]["key"], "ba");
        assert_eq!(value[0]["kind"], "property");
        assert_eq!(value[0]["name"], "background");
        assert_eq!(value[0]["options"]["canonical"], "bg");
        assert_eq!(value[1]["kind"], "blocked");
    }

    #[test]
    fn test_write_stats() {
        let mut out = NoColor::new(Vec::new());
        write_stats(&mut out, &sample().stats()).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();

        assert!(text.starts_with("Index Statistics"));
        assert!(text.contains("Full properties:  1"));
    }
}
