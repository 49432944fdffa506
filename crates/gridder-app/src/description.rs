// ABOUTME: Dashboard description files: groups of panels written in TOML.
// ABOUTME: Builds the panel groups and positioning tree a description declares.

use std::path::Path;

use anyhow::{Context, Result};
use gridder_core::{GridSettings, Layout, RowHeights};
use gridder_layout::{LayoutError, Node, PanelGroup, PanelPositioning};
use serde::Deserialize;

use crate::dashboard::{Dashboard, Panel, PanelKind};

/// Top level of a description file
#[derive(Debug, Deserialize)]
pub struct DashboardFile {
    pub title: String,
    #[serde(default)]
    pub groups: Vec<Entry>,
}

/// A group of panels, or a nested stack of further entries
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Stack { stack: Vec<Entry> },
    Group(GroupEntry),
}

#[derive(Debug, Deserialize)]
pub struct GroupEntry {
    pub layout: Layout,
    pub panels: Vec<PanelEntry>,
    pub row_heights: Option<RowHeights>,
    /// Title of the header row, if the group has one
    pub row: Option<String>,
    #[serde(default)]
    pub y: i64,
}

#[derive(Debug, Deserialize)]
pub struct PanelEntry {
    #[serde(rename = "type", default)]
    pub kind: PanelKind,
    #[serde(default)]
    pub title: String,
}

impl DashboardFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading dashboard description {}", path.display()))?;
        let file = toml::from_str(&content)
            .with_context(|| format!("parsing dashboard description {}", path.display()))?;
        Ok(file)
    }

    pub fn into_dashboard(self, settings: GridSettings) -> Result<Dashboard, LayoutError> {
        let mut tree = PanelPositioning::default();
        for node in self.groups {
            tree.add_child(node.build(settings)?);
        }
        tracing::info!(
            groups = tree.len(),
            height = tree.height(),
            "laid out dashboard {:?}",
            self.title
        );
        Dashboard::from_tree(self.title, &mut tree)
    }
}

impl Entry {
    fn build(self, settings: GridSettings) -> Result<Node<Panel>, LayoutError> {
        match self {
            Entry::Stack { stack } => {
                let children = stack
                    .into_iter()
                    .map(|node| node.build(settings))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PanelPositioning::new(children).into())
            }
            Entry::Group(group) => Ok(group.build(settings)?.into()),
        }
    }
}

impl GroupEntry {
    fn build(self, settings: GridSettings) -> Result<PanelGroup<Panel>, LayoutError> {
        let panels = self
            .panels
            .into_iter()
            .map(|p| Panel::new(p.kind, p.title))
            .collect();

        let mut builder = PanelGroup::builder(self.layout, panels)
            .y(self.y)
            .settings(settings);
        if let Some(heights) = self.row_heights {
            builder = builder.row_heights(heights);
        }
        if let Some(title) = self.row {
            builder = builder.row(Panel::row(title));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridder_core::GridPos;

    const DESCRIPTION: &str = r#"
title = "Services"

[[groups]]
layout = [["large", "medium"], ["small", "small"]]
row_heights = [8, 6]
panels = [
    { type = "timeseries", title = "Requests" },
    { type = "timeseries", title = "Latency" },
    { type = "bargauge", title = "Errors" },
    { type = "stat", title = "Uptime" },
]

[[groups]]
row = "Hosts"
layout = [1, 1, 1]
panels = [{ title = "a" }, { title = "b" }, { title = "c" }]

[[groups]]
stack = [
    { layout = [1], panels = [{ type = "text", title = "Notes" }], row_heights = 3 },
    { layout = [1, 3], panels = [{ type = "gauge" }, { type = "table" }], row = "Tail" },
]
"#;

    fn parse(text: &str) -> DashboardFile {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn parses_groups_and_stacks() {
        let file = parse(DESCRIPTION);
        assert_eq!(file.title, "Services");
        assert_eq!(file.groups.len(), 3);
        assert!(matches!(file.groups[0], Entry::Group(_)));
        assert!(matches!(&file.groups[2], Entry::Stack { stack } if stack.len() == 2));
    }

    #[test]
    fn builds_positioned_dashboard() {
        let dashboard = parse(DESCRIPTION)
            .into_dashboard(GridSettings::default())
            .unwrap();
        let positions: Vec<GridPos> = dashboard.panels.iter().map(|p| p.grid_pos).collect();

        assert_eq!(
            positions,
            vec![
                // 3:2, then 1:1 with a shorter second row; height 16
                GridPos::new(0, 0, 15, 8),
                GridPos::new(15, 0, 9, 8),
                GridPos::new(0, 9, 12, 6),
                GridPos::new(12, 9, 12, 6),
                // header plus three equal thirds; height 11
                GridPos::new(0, 16, 24, 1),
                GridPos::new(0, 18, 8, 8),
                GridPos::new(8, 18, 8, 8),
                GridPos::new(16, 18, 8, 8),
                // nested stack: a single short row, then a headed 1:3 row
                GridPos::new(0, 27, 24, 3),
                GridPos::new(0, 31, 24, 1),
                GridPos::new(0, 33, 6, 8),
                GridPos::new(6, 33, 18, 8),
            ]
        );
        assert_eq!(dashboard.panels[4].kind, PanelKind::Row);
        assert_eq!(dashboard.panels[4].title, "Hosts");
        assert_eq!(dashboard.panels[10].kind, PanelKind::Gauge);
    }

    #[test]
    fn reports_layout_mistakes() {
        let file = parse(
            r#"
            title = "Broken"
            [[groups]]
            layout = [1, 1]
            panels = [{ title = "only one" }, { title = "two" }, { title = "three" }]
            "#,
        );
        let err = file.into_dashboard(GridSettings::default()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnevenTemplate {
                template: 2,
                panels: 3
            }
        );
    }

    #[test]
    fn sample_dashboard_lays_out() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../dashboards/services.toml");
        let dashboard = DashboardFile::load(&path)
            .unwrap()
            .into_dashboard(GridSettings::default())
            .unwrap();

        assert_eq!(dashboard.title, "Services");
        assert_eq!(dashboard.panels.len(), 18);
        let last = dashboard.panels.last().unwrap();
        assert_eq!(last.title, "Mounts");
        // 18 + 11 + 4 + header (2) + a 6-high row and spacing
        assert_eq!(last.grid_pos, GridPos::new(18, 42, 6, 6));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("gridder-no-such-description.toml");
        let err = DashboardFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("reading dashboard description"));
    }
}
