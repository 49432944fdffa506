// ABOUTME: Minimal dashboard document: titled panels with grid positions.
// ABOUTME: Serializes to the JSON shape dashboard servers import.

use gridder_core::{GridPos, GridSettings, Layout, PanelSize, Positioned};
use gridder_layout::{LayoutError, PanelGroup, PanelPositioning};
use serde::{Deserialize, Serialize};

/// Schema version written into generated documents
const SCHEMA_VERSION: u32 = 39;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    #[default]
    Timeseries,
    Bargauge,
    Stat,
    Gauge,
    Table,
    Text,
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: PanelKind,
    pub title: String,
    pub grid_pos: GridPos,
}

impl Panel {
    pub fn new(kind: PanelKind, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind,
            title: title.into(),
            grid_pos: GridPos::default(),
        }
    }

    /// Collapsible header row
    pub fn row(title: impl Into<String>) -> Self {
        Self::new(PanelKind::Row, title)
    }
}

impl Positioned for Panel {
    fn grid_pos(&self) -> GridPos {
        self.grid_pos
    }

    fn set_grid_pos(&mut self, pos: GridPos) {
        self.grid_pos = pos;
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub editable: bool,
    pub schema_version: u32,
    pub panels: Vec<Panel>,
}

impl Dashboard {
    /// Number the panels in order and wrap them in a document
    pub fn new(title: impl Into<String>, mut panels: Vec<Panel>) -> Self {
        for (id, panel) in (1..).zip(panels.iter_mut()) {
            panel.id = id;
        }
        Self {
            title: title.into(),
            editable: true,
            schema_version: SCHEMA_VERSION,
            panels,
        }
    }

    /// Position every panel in the tree and collect them top to bottom
    pub fn from_tree(
        title: impl Into<String>,
        tree: &mut PanelPositioning<Panel>,
    ) -> Result<Self, LayoutError> {
        let panels = tree.flatten()?.into_iter().cloned().collect();
        Ok(Self::new(title, panels))
    }
}

/// Two groups stacked on top of each other: mixed time series and gauges,
/// then a titled row of three time series.
pub fn demo(settings: GridSettings) -> Result<Dashboard, LayoutError> {
    let overview = PanelGroup::builder(
        Layout::rows([
            [PanelSize::Large, PanelSize::Medium],
            [PanelSize::Small, PanelSize::Small],
        ]),
        vec![
            Panel::new(PanelKind::Timeseries, "Requests"),
            Panel::new(PanelKind::Timeseries, "Latency"),
            Panel::new(PanelKind::Bargauge, "Errors by route"),
            Panel::new(PanelKind::Bargauge, "Saturation"),
        ],
    )
    .settings(settings)
    .build()?;

    let details = PanelGroup::builder(
        Layout::repeat([PanelSize::Small, PanelSize::Medium, PanelSize::Medium]),
        vec![
            Panel::new(PanelKind::Timeseries, "CPU"),
            Panel::new(PanelKind::Timeseries, "Memory"),
            Panel::new(PanelKind::Timeseries, "Disk"),
        ],
    )
    .row(Panel::row("RowTitle"))
    .settings(settings)
    .build()?;

    let mut tree = PanelPositioning::new([overview.into(), details.into()]);
    Dashboard::from_tree("My Dashboard", &mut tree)
}
