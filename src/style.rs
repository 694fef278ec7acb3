//! Plot style selection
//!
//! The backend recognizes a fixed set of style tokens after `with` in a plot
//! command. The mapping here is total: every variant has exactly one token,
//! enforced by an exhaustive match, so adding a variant without a token is a
//! compile error rather than an out-of-range table lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Line/point style for a 2D plot command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotStyle {
    #[default]
    Lines,
    Points,
    LinesPoints,
    Impulses,
    Dots,
    Steps,
    FSteps,
    HiSteps,
    Boxes,
    FilledCurvesX1,
    FilledCurvesY1,
    FilledCurvesClosed,
}

/// All styles, in declaration order. Used for iteration and lookup tables.
pub const ALL_STYLES: [PlotStyle; 12] = [
    PlotStyle::Lines,
    PlotStyle::Points,
    PlotStyle::LinesPoints,
    PlotStyle::Impulses,
    PlotStyle::Dots,
    PlotStyle::Steps,
    PlotStyle::FSteps,
    PlotStyle::HiSteps,
    PlotStyle::Boxes,
    PlotStyle::FilledCurvesX1,
    PlotStyle::FilledCurvesY1,
    PlotStyle::FilledCurvesClosed,
];

impl PlotStyle {
    /// Backend token for this style, as written after `with`
    pub fn name(self) -> &'static str {
        match self {
            PlotStyle::Lines => "lines",
            PlotStyle::Points => "points",
            PlotStyle::LinesPoints => "linespoints",
            PlotStyle::Impulses => "impulses",
            PlotStyle::Dots => "dots",
            PlotStyle::Steps => "steps",
            PlotStyle::FSteps => "fsteps",
            PlotStyle::HiSteps => "histeps",
            PlotStyle::Boxes => "boxes",
            PlotStyle::FilledCurvesX1 => "filledcurves x1",
            PlotStyle::FilledCurvesY1 => "filledcurves y1",
            PlotStyle::FilledCurvesClosed => "filledcurves closed",
        }
    }

    /// Inverse lookup from a backend token. Strict: unknown tokens are None.
    pub fn parse(token: &str) -> Option<Self> {
        ALL_STYLES.iter().copied().find(|s| s.name() == token)
    }
}

impl fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
