use std::fmt::Display;

use csnades_scraping_utils::regex;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::csnades::schema::{NadeResult, NadeSummary};

/// Stands in for the command line of a record whose detail page had no
/// usable console text.
pub const MISSING_CONSOLE_MARKER: &str = "MISSING_CONSOLE";

pub struct ArtifactHeader {
    pub source_label: String,
    pub total: usize,
}

pub fn missing_console_count(results: &[NadeResult]) -> usize {
    (results.iter())
        .filter(|result| result.console_text.is_none())
        .count()
}

/// Renders the final cfg document: a two-line header, one block per record
/// in the given order, and a trailing missing-console counter. Pure text
/// assembly; errors never reach this point as anything but absent consoles.
pub fn render_config(results: &[NadeResult], header: &ArtifactHeader) -> String {
    let missing = missing_console_count(results);
    let blocks = results.iter().map(describe_nade).join_concat();
    format!(
        "// Nades from {source}\n// Total nades: {total}\n\n{blocks}// Missing console: {missing}\n",
        source = header.source_label,
        total = header.total,
    )
}

fn describe_nade(result: &NadeResult) -> impl Display + '_ {
    let label = nade_label(&result.summary);
    let source_line = lazy_format!(
        if let Some(url) = &result.source_url => "// {url}\n"
        else => ""
    );
    let command_line = lazy_format!(match (&result.console_text) {
        Some(console) => (
            "{}",
            narrow_to_command_pair(console).unwrap_or_else(|| console.trim()),
        ),
        None => ("{}", MISSING_CONSOLE_MARKER),
    });
    lazy_format!("// {label}\n{source_line}{command_line}\n\n")
}

fn nade_label(summary: &NadeSummary) -> impl Display + '_ {
    let team = match summary.team() {
        Some(team) => team.label(),
        None => "ANY",
    };
    let place = lazy_format!(match ((summary.title_from(), summary.title_to())) {
        (Some(from), Some(to)) => "{from} -> {to}",
        _ => ("{}", summary.slug()),
    });
    lazy_format!("{} | {team} | {place}", summary.nade_type().label())
}

/// Cuts a console value down to its first `setpos …;setang …` teleport pair
/// when one is embedded among other commands. Values without such a pair are
/// left for the caller to use as-is.
pub fn narrow_to_command_pair(console: &str) -> Option<&str> {
    regex!(r"setpos [0-9. -]+;\s*setang [0-9. -]+")
        .find(console)
        .map(|found| found.as_str().trim_end())
}
