//! Plain-text rendering of a [`FinalReport`].

use std::fmt::Write as _;
use std::io;

use crate::{FinalReport, OutputResult, Standing};

/// Which standings the text report lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportLayout {
    /// Every agent, best first.
    Full,
    /// The best `top` and the worst `bottom` agents as two sections.
    /// Sections may overlap when the population is small.
    TopBottom { top: usize, bottom: usize },
}

/// Formats a [`FinalReport`] as text.  Pure formatting.
#[derive(Copy, Clone, Debug)]
pub struct TextReporter {
    pub layout: ReportLayout,
}

impl TextReporter {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// Top 10 and bottom 10.
    pub fn classic() -> Self {
        Self::new(ReportLayout::TopBottom { top: 10, bottom: 10 })
    }

    pub fn render(&self, report: &FinalReport) -> String {
        let mut out = String::from("--- simulation finished ---\n");
        // Writing to a String cannot fail.
        let _ = writeln!(out, "ticks run: {}", report.ticks);

        match self.layout {
            ReportLayout::Full => {
                section(&mut out, &format!("all {} agents", report.len()), &report.standings);
            }
            ReportLayout::TopBottom { top, bottom } => {
                section(&mut out, &format!("top {top}"), report.top(top));
                section(&mut out, &format!("bottom {bottom}"), report.bottom(bottom));
            }
        }
        out
    }

    /// Render into `w`.
    pub fn write_to<W: io::Write>(&self, report: &FinalReport, mut w: W) -> OutputResult<()> {
        w.write_all(self.render(report).as_bytes())?;
        w.flush()?;
        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::classic()
    }
}

/// One report line, without the trailing newline.
pub fn format_standing(s: &Standing) -> String {
    format!(
        "{}. talent: {:.2} (speed {:.2}), luck: {}, rejections: {}, collisions: {:.2}",
        s.rank, s.talent, s.speed, s.luck_points, s.rejection_points, s.collision_points,
    )
}

fn section(out: &mut String, title: &str, standings: &[Standing]) {
    let _ = writeln!(out, "\n--- {title} ---");
    for s in standings {
        let _ = writeln!(out, "{}", format_standing(s));
    }
}
