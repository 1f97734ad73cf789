use crate::areas::repository::Repository;
use crate::artifacts::calendar;
use crate::artifacts::canvas::pixel_grid::PixelGrid;
use crate::artifacts::graph_log::GRAPH_FILE;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use std::io::Write;

impl Repository {
    /// Draws the grid onto the commit-activity calendar: one empty,
    /// backdated commit per lit cell, all on a fresh `draw-*` branch.
    ///
    /// A failed cell is reported and skipped; the run keeps going and its
    /// ordinal is never reused. Only branch creation aborts the run.
    pub fn draw(&mut self, grid: &PixelGrid) -> anyhow::Result<()> {
        let branch_name = format!("draw-{}", Local::now().format("%Y-%m-%d-%H-%M-%S"));
        self.git()
            .create_branch(&branch_name)
            .context("failed to create branch")?;

        let start = calendar::start_sunday();

        let mut commit_count = 0;
        for (column, row) in grid.lit_cells() {
            let date = calendar::cell_date(start, column, row);
            commit_count += 1;

            if let Err(err) = self.commit_cell(date, commit_count) {
                writeln!(self.writer(), "Failed to commit at {date}: {err:#}")?;
            }
        }

        Ok(())
    }

    /// One cell's commit sequence: log entry, stage, commit. Any failing
    /// step fails the whole cell; nothing already written is rolled back.
    fn commit_cell(&self, date: NaiveDate, ordinal: usize) -> anyhow::Result<()> {
        let timestamp = date
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
            .with_context(|| format!("no local midnight on {date}"))?;

        writeln!(self.writer(), "Commit at: {}", timestamp.to_rfc3339())?;

        self.graph_log().record(date, ordinal)?;
        self.git().stage(GRAPH_FILE)?;

        let message = format!("GitHubDraw: {date} commit #{ordinal}");
        self.git().commit(&message, &timestamp)
    }
}
