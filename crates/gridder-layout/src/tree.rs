// ABOUTME: Vertical stacking of panel groups and nested stacks.
// ABOUTME: Assigns each child its offset and flattens the tree into ordered panels.

use gridder_core::Positioned;

use crate::error::{check_offset, check_span};
use crate::{LayoutError, PanelGroup};

/// A child of a [`PanelPositioning`]
#[derive(Debug)]
pub enum Node<P> {
    Group(PanelGroup<P>),
    Tree(PanelPositioning<P>),
}

/// Stacks groups of panels vertically, in the order they were added.
///
/// Offsets are not cached: every call to [`PanelPositioning::flatten`] walks the
/// children again starting from the tree's own `y`, so the result always reflects
/// the current children and origin.
#[derive(Debug)]
pub struct PanelPositioning<P> {
    children: Vec<Node<P>>,
    y: u32,
}

impl<P: Positioned> Node<P> {
    pub fn height(&self) -> u32 {
        match self {
            Node::Group(group) => group.height(),
            Node::Tree(tree) => tree.height(),
        }
    }

    /// The header row, if this child is a group that has one
    pub fn row(&self) -> Option<&P> {
        match self {
            Node::Group(group) => group.row(),
            Node::Tree(_) => None,
        }
    }

    fn place_at(&mut self, y: u32) -> Result<(), LayoutError> {
        match self {
            Node::Group(group) => group.move_to(y),
            Node::Tree(tree) => {
                tree.y = y;
                tree.place()
            }
        }
    }
}

impl<P> Node<P> {
    fn collect<'a>(&'a self, out: &mut Vec<&'a P>) {
        match self {
            Node::Group(group) => {
                out.extend(group.row());
                out.extend(group.panels());
            }
            Node::Tree(tree) => {
                for child in &tree.children {
                    child.collect(out);
                }
            }
        }
    }

    fn collect_owned(self, out: &mut Vec<P>) {
        match self {
            Node::Group(group) => {
                let (row, panels) = group.into_parts();
                out.extend(row);
                out.extend(panels);
            }
            Node::Tree(tree) => {
                for child in tree.children {
                    child.collect_owned(out);
                }
            }
        }
    }

    fn panel_count(&self) -> usize {
        match self {
            Node::Group(group) => group.panel_count(),
            Node::Tree(tree) => tree.children.iter().map(Node::panel_count).sum(),
        }
    }
}

impl<P> From<PanelGroup<P>> for Node<P> {
    fn from(group: PanelGroup<P>) -> Self {
        Node::Group(group)
    }
}

impl<P> From<PanelPositioning<P>> for Node<P> {
    fn from(tree: PanelPositioning<P>) -> Self {
        Node::Tree(tree)
    }
}

impl<P: Positioned> PanelPositioning<P> {
    pub fn new(children: impl IntoIterator<Item = Node<P>>) -> Self {
        Self {
            children: children.into_iter().collect(),
            y: 0,
        }
    }

    /// Append a group or nested tree below the existing children
    pub fn add_child(&mut self, child: impl Into<Node<P>>) {
        self.children.push(child.into());
    }

    /// Sum of the children's heights, saturating at the end of the grid
    pub fn height(&self) -> u32 {
        self.children
            .iter()
            .fold(0u32, |total, child| total.saturating_add(child.height()))
    }

    /// Record a new origin; children move on the next flatten
    pub fn set_y(&mut self, y: i64) -> Result<(), LayoutError> {
        let y = check_offset(y)?;
        check_span(y, self.height())?;
        self.y = y;
        Ok(())
    }

    fn place(&mut self) -> Result<(), LayoutError> {
        let mut current_y = self.y;
        for child in &mut self.children {
            child.place_at(current_y)?;
            current_y = current_y
                .checked_add(child.height())
                .ok_or(LayoutError::OffsetOutOfRange(i64::from(current_y)))?;
        }
        Ok(())
    }

    /// Position every child, then list all panels top to bottom.
    ///
    /// Each group contributes its header (if any) followed by its panels; nested trees
    /// contribute their own flattened panels in place. Calling this repeatedly gives
    /// the same result until children or the origin change. Fails if the stack would
    /// run past the bottom of the grid.
    pub fn flatten(&mut self) -> Result<Vec<&P>, LayoutError> {
        self.place()?;
        tracing::debug!(
            y = self.y,
            height = self.height(),
            children = self.children.len(),
            "positioned panel tree"
        );

        let mut panels = Vec::with_capacity(self.panel_count());
        for child in &self.children {
            child.collect(&mut panels);
        }
        Ok(panels)
    }

    /// Position every child, then give back all panels in flatten order
    pub fn into_panels(mut self) -> Result<Vec<P>, LayoutError> {
        self.place()?;
        let mut panels = Vec::with_capacity(self.panel_count());
        for child in self.children {
            child.collect_owned(&mut panels);
        }
        Ok(panels)
    }
}

impl<P> PanelPositioning<P> {
    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn children(&self) -> &[Node<P>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of panels a flatten returns, headers included
    pub fn panel_count(&self) -> usize {
        self.children.iter().map(Node::panel_count).sum()
    }
}

impl<P> Default for PanelPositioning<P> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            y: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridder_core::{GridPos, Layout};

    fn blank(count: usize) -> Vec<GridPos> {
        vec![GridPos::default(); count]
    }

    /// 3:2 over 1:1, height 18
    fn mixed_group() -> PanelGroup<GridPos> {
        PanelGroup::new(Layout::Rows(vec![vec![3, 2], vec![1, 1]]), blank(4)).unwrap()
    }

    /// 1:2:2 under a header, height 11
    fn headed_group() -> PanelGroup<GridPos> {
        PanelGroup::builder(Layout::Repeat(vec![1, 2, 2]), blank(3))
            .row(GridPos::default())
            .build()
            .unwrap()
    }

    fn positions(panels: &[&GridPos]) -> Vec<GridPos> {
        panels.iter().map(|p| **p).collect()
    }

    #[test]
    fn stacks_groups_in_order() {
        let mut tree = PanelPositioning::new([mixed_group().into(), headed_group().into()]);

        assert_eq!(tree.height(), 29);
        assert_eq!(tree.panel_count(), 8);

        let panels = positions(&tree.flatten().unwrap());
        assert_eq!(
            panels,
            vec![
                GridPos::new(0, 0, 15, 8),
                GridPos::new(15, 0, 9, 8),
                GridPos::new(0, 9, 12, 8),
                GridPos::new(12, 9, 12, 8),
                GridPos::new(0, 18, 24, 1),
                GridPos::new(0, 20, 4, 8),
                GridPos::new(4, 20, 10, 8),
                GridPos::new(14, 20, 10, 8),
            ]
        );
    }

    #[test]
    fn flatten_is_repeatable() {
        let mut tree = PanelPositioning::new([headed_group().into(), mixed_group().into()]);
        let first = positions(&tree.flatten().unwrap());
        let second = positions(&tree.flatten().unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn origin_applies_on_next_flatten() {
        let mut tree = PanelPositioning::new([mixed_group().into()]);
        tree.set_y(5).unwrap();
        assert_eq!(tree.y(), 5);

        let ys: Vec<u32> = tree.flatten().unwrap().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![5, 5, 14, 14]);

        tree.set_y(0).unwrap();
        let ys: Vec<u32> = tree.flatten().unwrap().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0, 0, 9, 9]);
    }

    #[test]
    fn set_y_rejects_negative() {
        let mut tree: PanelPositioning<GridPos> = PanelPositioning::default();
        assert_eq!(tree.set_y(-3), Err(LayoutError::NegativeOffset(-3)));
        assert_eq!(tree.y(), 0);
    }

    #[test]
    fn set_y_rejects_origin_past_grid_end() {
        let mut tree = PanelPositioning::new([
            PanelGroup::new(Layout::Repeat(vec![1]), blank(1)).unwrap().into(),
            PanelGroup::new(Layout::Repeat(vec![1]), blank(1)).unwrap().into(),
        ]);
        let top = i64::from(u32::MAX) - 5;

        assert_eq!(tree.set_y(top), Err(LayoutError::OffsetOutOfRange(top)));
        assert_eq!(tree.y(), 0);
        assert_eq!(tree.flatten().unwrap()[1].y, 9);
    }

    #[test]
    fn flatten_fails_when_children_overrun_grid() {
        let mut tree = PanelPositioning::new([mixed_group().into()]);
        let top = u32::MAX - 20;
        tree.set_y(i64::from(top)).unwrap();
        assert_eq!(tree.flatten().unwrap()[0].y, top);

        tree.add_child(headed_group());
        assert_eq!(
            tree.flatten().unwrap_err(),
            LayoutError::OffsetOutOfRange(i64::from(top + 18))
        );

        let nested = PanelPositioning::new([tree.into()]);
        let mut outer = PanelPositioning::new([mixed_group().into(), nested.into()]);
        assert!(outer.flatten().is_ok());
    }

    #[test]
    fn added_children_go_to_the_bottom() {
        let mut tree = PanelPositioning::new([mixed_group().into()]);
        assert_eq!(tree.flatten().unwrap().len(), 4);

        tree.add_child(headed_group());
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.height(), 29);

        let panels = tree.flatten().unwrap();
        assert_eq!(panels.len(), 8);
        assert_eq!(*panels[4], GridPos::new(0, 18, 24, 1));
    }

    #[test]
    fn nested_tree_matches_inlined_children() {
        let mut nested = PanelPositioning::new([mixed_group().into()]);
        nested.add_child(PanelPositioning::new([
            headed_group().into(),
            mixed_group().into(),
        ]));
        nested.add_child(headed_group());

        let mut inlined = PanelPositioning::new([
            mixed_group().into(),
            headed_group().into(),
            mixed_group().into(),
            headed_group().into(),
        ]);

        assert_eq!(nested.height(), inlined.height());
        assert_eq!(nested.panel_count(), inlined.panel_count());
        assert_eq!(
            positions(&nested.flatten().unwrap()),
            positions(&inlined.flatten().unwrap())
        );
    }

    #[test]
    fn deeply_nested_trees_stack() {
        let inner = PanelPositioning::new([headed_group().into()]);
        let middle = PanelPositioning::new([inner.into()]);
        let mut outer = PanelPositioning::new([mixed_group().into(), middle.into()]);
        outer.set_y(2).unwrap();

        let panels = outer.flatten().unwrap();
        assert_eq!(*panels[4], GridPos::new(0, 20, 24, 1));
        assert_eq!(panels[5].y, 22);
    }

    #[test]
    fn children_report_headers() {
        let tree = PanelPositioning::new([mixed_group().into(), headed_group().into()]);
        let headers: Vec<bool> = tree.children().iter().map(|c| c.row().is_some()).collect();
        assert_eq!(headers, vec![false, true]);
    }

    #[test]
    fn empty_tree() {
        let mut tree: PanelPositioning<GridPos> = PanelPositioning::default();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert!(tree.flatten().unwrap().is_empty());
    }

    #[test]
    fn into_panels_returns_positioned_panels() {
        let mut tree = PanelPositioning::new([mixed_group().into()]);
        tree.add_child(headed_group());
        tree.set_y(1).unwrap();

        let panels = tree.into_panels().unwrap();
        assert_eq!(panels.len(), 8);
        assert_eq!(panels[0], GridPos::new(0, 1, 15, 8));
        assert_eq!(panels[4], GridPos::new(0, 19, 24, 1));
    }
}
