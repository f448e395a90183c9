use std::fmt::Write;

use tally_core::table::TableReport;

/// How many ranked entries to show per player by default, matching the
/// display the engine's output was designed for.
pub const DEFAULT_TOP_N: usize = 6;

/// Format a full report for the terminal: the remaining-deck summary
/// followed by each player's top-N ranking.
pub fn render_report(report: &TableReport, top: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Remaining deck ({} cards):", report.remaining_total);
    for entry in &report.remaining {
        let _ = writeln!(out, "  {}: {}", entry.card, entry.count);
    }

    for player in &report.players {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({} unknown):", player.name, player.unknown_count);
        for entry in player.ranked.iter().take(top) {
            let _ = writeln!(
                out,
                "  {}: {:.1}% (expected {:.2})",
                entry.card, entry.probability_percent, entry.expected
            );
        }
    }

    out
}
