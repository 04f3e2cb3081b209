//! The `OutputWriter` trait implemented by file backends.

use crate::{FinalReport, OutputResult};

/// A destination for the final standings.
pub trait OutputWriter {
    /// Write every standing in `report`, in rank order.
    fn write_report(&mut self, report: &FinalReport) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
