//! `lg-output` — what a finished run produces.
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`report`] | `rank`, `FinalReport`, `Standing`                           |
//! | [`text`]   | `TextReporter` with full or top/bottom layouts              |
//! | [`csv`]    | `CsvWriter`, writes `standings.csv`                         |
//! | [`writer`] | `OutputWriter` trait implemented by file backends           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lg_output::{CsvWriter, FinalReport, OutputWriter, TextReporter};
//!
//! let report = FinalReport::new(stats.ticks, &sim.agents);
//! print!("{}", TextReporter::classic().render(&report));
//!
//! let mut csv = CsvWriter::new(Path::new("./output"))?;
//! csv.write_report(&report)?;
//! csv.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::{FinalReport, Standing, rank};
pub use text::{ReportLayout, TextReporter};
pub use writer::OutputWriter;
