//! CSV output backend.
//!
//! Creates `standings.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FinalReport, OutputResult};

/// Column order of `standings.csv`.
pub const STANDINGS_HEADER: [&str; 7] = [
    "rank",
    "agent_id",
    "talent",
    "speed",
    "luck_points",
    "rejection_points",
    "collision_points",
];

/// Writes the final standings to one CSV file.
pub struct CsvWriter {
    standings: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open `standings.csv` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let mut standings = Writer::from_path(dir.join("standings.csv"))?;
        standings.write_record(STANDINGS_HEADER)?;
        Ok(Self { standings, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_report(&mut self, report: &FinalReport) -> OutputResult<()> {
        for s in &report.standings {
            self.standings.write_record(&[
                s.rank.to_string(),
                s.agent.0.to_string(),
                s.talent.to_string(),
                s.speed.to_string(),
                s.luck_points.to_string(),
                s.rejection_points.to_string(),
                s.collision_points.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.standings.flush()?;
        Ok(())
    }
}
