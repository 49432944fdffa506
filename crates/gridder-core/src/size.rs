// ABOUTME: Relative panel widths and the row layouts built from them.
// ABOUTME: Layouts hold plain weights; named tiers are a convenience vocabulary.

use serde::{Deserialize, Serialize};

/// Width of a panel relative to the other panels on its row.
///
/// An XLARGE panel is four times as wide as a SMALL one, a LARGE panel three times,
/// a MEDIUM panel twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSize {
    Small,
    Medium,
    Large,
    #[serde(alias = "x_large")]
    Xlarge,
}

impl PanelSize {
    pub const fn units(self) -> u32 {
        match self {
            PanelSize::Small => 1,
            PanelSize::Medium => 2,
            PanelSize::Large => 3,
            PanelSize::Xlarge => 4,
        }
    }

    pub fn all() -> &'static [PanelSize] {
        &[
            PanelSize::Small,
            PanelSize::Medium,
            PanelSize::Large,
            PanelSize::Xlarge,
        ]
    }
}

impl From<PanelSize> for u32 {
    fn from(size: PanelSize) -> Self {
        size.units()
    }
}

/// A relative width as written in a dashboard file: either a tier name or raw units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelativeSize {
    Units(u32),
    Named(PanelSize),
}

impl From<RelativeSize> for u32 {
    fn from(relative: RelativeSize) -> Self {
        match relative {
            RelativeSize::Units(units) => units,
            RelativeSize::Named(size) => size.units(),
        }
    }
}

/// How the panels of a group are split into rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawLayout")]
pub enum Layout {
    /// Explicit weights for every row, top to bottom
    Rows(Vec<Vec<u32>>),
    /// A single row template, repeated until every panel is placed
    Repeat(Vec<u32>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLayout {
    Rows(Vec<Vec<RelativeSize>>),
    Repeat(Vec<RelativeSize>),
}

impl From<RawLayout> for Layout {
    fn from(raw: RawLayout) -> Self {
        match raw {
            RawLayout::Rows(rows) => Layout::rows(rows),
            RawLayout::Repeat(template) => Layout::repeat(template),
        }
    }
}

impl Layout {
    pub fn rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<u32>,
    {
        Layout::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    pub fn repeat<S: Into<u32>>(template: impl IntoIterator<Item = S>) -> Self {
        Layout::Repeat(template.into_iter().map(Into::into).collect())
    }
}

/// Height of the rows in a group: one value for all rows, or one per row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowHeights {
    Uniform(u32),
    PerRow(Vec<u32>),
}

impl From<u32> for RowHeights {
    fn from(height: u32) -> Self {
        RowHeights::Uniform(height)
    }
}

impl From<Vec<u32>> for RowHeights {
    fn from(heights: Vec<u32>) -> Self {
        RowHeights::PerRow(heights)
    }
}
