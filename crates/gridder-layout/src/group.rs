// ABOUTME: A block of panel rows with fixed relative widths and row heights.
// ABOUTME: Computes absolute grid positions for every panel at construction.

use gridder_core::{GridPos, GridSettings, Layout, Positioned, RowHeights};

use crate::error::{check_offset, check_span};
use crate::width::allocate_widths;
use crate::LayoutError;

/// Rows between a group's header and its first data row
const HEADER_SPAN: u32 = 2;

/// Empty rows left below every data row
const ROW_SPACING: u32 = 1;

/// Panels laid out in rows across the full grid width.
///
/// Each row fills the whole grid; the width of a panel is computed relative to the
/// other panels on the same row. A layout of `[[1, 2], [1]]` produces two rows: the
/// first splits the grid one third / two thirds, the second gives its single panel
/// the full width.
///
/// Positions are written into the panels when the group is built. Moving the group
/// with [`PanelGroup::set_y`] shifts them without recomputing widths.
#[derive(Debug)]
pub struct PanelGroup<P> {
    widths: Vec<Vec<u32>>,
    row_heights: Vec<u32>,
    panels: Vec<P>,
    row: Option<P>,
    y: u32,
    grid_width: u32,
}

/// Collects the optional parts of a [`PanelGroup`] before validating it
#[derive(Debug)]
pub struct PanelGroupBuilder<P> {
    layout: Layout,
    panels: Vec<P>,
    y: i64,
    row_heights: Option<RowHeights>,
    row: Option<P>,
    settings: GridSettings,
}

impl<P: Positioned> PanelGroupBuilder<P> {
    /// Top of the group; negative values are treated as 0
    pub fn y(mut self, y: i64) -> Self {
        self.y = y;
        self
    }

    /// One height for every row, or one height per row
    pub fn row_heights(mut self, heights: impl Into<RowHeights>) -> Self {
        self.row_heights = Some(heights.into());
        self
    }

    /// Full-width header placed above the first row
    pub fn row(mut self, row: P) -> Self {
        self.row = Some(row);
        self
    }

    pub fn settings(mut self, settings: GridSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<PanelGroup<P>, LayoutError> {
        let rows = normalize_rows(self.layout, self.panels.len())?;
        let heights = self
            .row_heights
            .unwrap_or(RowHeights::Uniform(self.settings.row_height));
        let row_heights = expand_heights(heights, rows.len())?;
        let widths = rows
            .iter()
            .map(|weights| allocate_widths(weights, self.settings.width))
            .collect::<Result<Vec<_>, _>>()?;

        if self.y < 0 {
            tracing::debug!(y = self.y, "negative group origin, using 0");
        }
        let y = check_offset(self.y.max(0))?;
        let height = span(&row_heights, self.row.is_some()).ok_or(LayoutError::HeightOverflow)?;
        check_span(y, height)?;

        let mut group = PanelGroup {
            widths,
            row_heights,
            panels: self.panels,
            row: self.row,
            y,
            grid_width: self.settings.width,
        };
        group.compute_grid_pos();
        Ok(group)
    }
}

impl<P: Positioned> PanelGroup<P> {
    pub fn builder(layout: Layout, panels: Vec<P>) -> PanelGroupBuilder<P> {
        PanelGroupBuilder {
            layout,
            panels,
            y: 0,
            row_heights: None,
            row: None,
            settings: GridSettings::default(),
        }
    }

    /// Group at the top of the grid with default row heights and no header
    pub fn new(layout: Layout, panels: Vec<P>) -> Result<Self, LayoutError> {
        Self::builder(layout, panels).build()
    }

    fn compute_grid_pos(&mut self) {
        let mut current_y = self.y;
        if let Some(row) = &mut self.row {
            row.set_grid_pos(GridPos::header(current_y, self.grid_width));
            current_y += HEADER_SPAN;
        }

        let mut panels = self.panels.iter_mut();
        for (widths, &height) in self.widths.iter().zip(&self.row_heights) {
            let mut current_x = 0;
            for (&width, panel) in widths.iter().zip(panels.by_ref()) {
                panel.set_rectangle(current_x, current_y, width, height);
                current_x += width;
            }
            current_y += height + ROW_SPACING;
        }

        tracing::trace!(
            y = self.y,
            rows = self.widths.len(),
            panels = self.panels.len(),
            "computed group positions"
        );
    }

    /// Move the group so its top sits at `y`
    pub fn set_y(&mut self, y: i64) -> Result<(), LayoutError> {
        let y = check_offset(y)?;
        self.move_to(y)
    }

    pub(crate) fn move_to(&mut self, y: u32) -> Result<(), LayoutError> {
        check_span(y, self.height())?;
        if y == self.y {
            return Ok(());
        }
        let from = self.y;
        for panel in self.row.iter_mut().chain(self.panels.iter_mut()) {
            panel.translate_y(from, y);
        }
        self.y = y;
        Ok(())
    }
}

impl<P> PanelGroup<P> {
    /// Vertical span including row spacing and the header, if any
    pub fn height(&self) -> u32 {
        // checked against overflow when the group was built
        let rows: u32 = self.row_heights.iter().sum();
        let spacing = self.row_heights.len() as u32 * ROW_SPACING;
        let header = if self.row.is_some() { HEADER_SPAN } else { 0 };
        rows + spacing + header
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    pub fn row(&self) -> Option<&P> {
        self.row.as_ref()
    }

    pub fn row_count(&self) -> usize {
        self.widths.len()
    }

    /// Allocated column widths, one list per row
    pub fn widths(&self) -> &[Vec<u32>] {
        &self.widths
    }

    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    /// Number of positioned objects, header included
    pub fn panel_count(&self) -> usize {
        self.panels.len() + usize::from(self.row.is_some())
    }

    /// Hand the header and panels back to the caller
    pub fn into_parts(self) -> (Option<P>, Vec<P>) {
        (self.row, self.panels)
    }
}

fn normalize_rows(layout: Layout, panel_count: usize) -> Result<Vec<Vec<u32>>, LayoutError> {
    let rows = match layout {
        Layout::Rows(rows) => rows,
        Layout::Repeat(template) => {
            if template.is_empty() {
                return Err(LayoutError::EmptyLayout);
            }
            if panel_count % template.len() != 0 {
                return Err(LayoutError::UnevenTemplate {
                    template: template.len(),
                    panels: panel_count,
                });
            }
            let count = panel_count / template.len();
            vec![template; count]
        }
    };

    if rows.is_empty() {
        return Err(LayoutError::EmptyLayout);
    }
    if let Some(row) = rows.iter().position(Vec::is_empty) {
        return Err(LayoutError::EmptyRow { row });
    }
    let expected: usize = rows.iter().map(Vec::len).sum();
    if expected != panel_count {
        return Err(LayoutError::PanelCountMismatch {
            expected,
            panels: panel_count,
        });
    }
    Ok(rows)
}

fn span(row_heights: &[u32], has_header: bool) -> Option<u32> {
    let header = if has_header { HEADER_SPAN } else { 0 };
    row_heights.iter().try_fold(header, |total, &height| {
        total.checked_add(height)?.checked_add(ROW_SPACING)
    })
}

fn expand_heights(heights: RowHeights, rows: usize) -> Result<Vec<u32>, LayoutError> {
    let heights = match heights {
        RowHeights::Uniform(height) => vec![height; rows],
        RowHeights::PerRow(heights) => {
            if heights.len() != rows {
                return Err(LayoutError::RowHeightCountMismatch {
                    rows,
                    heights: heights.len(),
                });
            }
            heights
        }
    };
    if let Some(row) = heights.iter().position(|&h| h == 0) {
        return Err(LayoutError::ZeroRowHeight { row });
    }
    Ok(heights)
}
