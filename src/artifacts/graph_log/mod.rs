//! The `graph.md` drawing log
//!
//! Every synthetic commit leaves a trace in a plain-text log at the
//! repository root, grouped into one section per calendar day. The log is
//! the file each commit actually stages, so it doubles as the tracked
//! content that makes the history non-degenerate.

use anyhow::Context;
use chrono::NaiveDate;
use derive_new::new;
use std::io::ErrorKind;
use std::path::Path;

/// Name of the log file, relative to the repository root.
pub const GRAPH_FILE: &str = "graph.md";

/// Reads, amends and rewrites `graph.md` one entry at a time.
///
/// Whole-file read-modify-write is only safe because the draw loop is
/// strictly sequential; nothing else touches the file during a run.
#[derive(new)]
pub struct GraphLog {
    root: Box<Path>,
}

impl GraphLog {
    /// Records one commit under its day section.
    ///
    /// A day's header line is `<YYYY-MM-DD>:`. New entries are inserted
    /// right below the header, so entries within a day read newest-first,
    /// while unseen days get header and entry appended at the end.
    pub fn record(&self, day: NaiveDate, ordinal: usize) -> anyhow::Result<()> {
        let path = self.root.join(GRAPH_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read '{}'", path.display()));
            }
        };

        let header = format!("{}:", day.format("%Y-%m-%d"));
        let entry = format!("- commit #{ordinal}");

        let mut lines: Vec<&str> = content.split('\n').collect();
        match lines.iter().position(|line| *line == header) {
            Some(index) => lines.insert(index + 1, &entry),
            None => {
                lines.push(&header);
                lines.push(&entry);
            }
        }

        std::fs::write(&path, lines.join("\n"))
            .with_context(|| format!("failed to write '{}'", path.display()))
    }
}
