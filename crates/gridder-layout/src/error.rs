// ABOUTME: Validation failures raised while building or moving panel layouts.
// ABOUTME: Every variant is a caller mistake; nothing here is retried.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Layout has no rows")]
    EmptyLayout,

    #[error("Row {row} has no panels")]
    EmptyRow { row: usize },

    #[error("Cannot allocate widths for an empty row")]
    NoWeights,

    #[error("Relative sizes must be positive")]
    ZeroWeight,

    #[error("{count} panels do not fit on a row {width} units wide")]
    RowTooWide { count: usize, width: u32 },

    #[error("Panel count ({panels}) does not match layout ({expected})")]
    PanelCountMismatch { expected: usize, panels: usize },

    #[error("Panel count ({panels}) is not a multiple of the row template length ({template})")]
    UnevenTemplate { template: usize, panels: usize },

    #[error("Row height count ({heights}) does not match layout ({rows} rows)")]
    RowHeightCountMismatch { rows: usize, heights: usize },

    #[error("Row {row} has zero height")]
    ZeroRowHeight { row: usize },

    #[error("y-axis position must be at least 0, got {0}")]
    NegativeOffset(i64),

    #[error("y-axis position {0} is outside the grid")]
    OffsetOutOfRange(i64),

    #[error("Rows are too tall for the grid")]
    HeightOverflow,
}

/// Validate a vertical origin handed in by a caller
pub(crate) fn check_offset(y: i64) -> Result<u32, LayoutError> {
    if y < 0 {
        return Err(LayoutError::NegativeOffset(y));
    }
    u32::try_from(y).map_err(|_| LayoutError::OffsetOutOfRange(y))
}

/// Make sure a block of `height` rows starting at `y` stays addressable
pub(crate) fn check_span(y: u32, height: u32) -> Result<(), LayoutError> {
    match y.checked_add(height) {
        Some(_) => Ok(()),
        None => Err(LayoutError::OffsetOutOfRange(i64::from(y))),
    }
}
