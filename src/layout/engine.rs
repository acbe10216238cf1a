//! TaffyTree wrapper for layout computation.
//!
//! [`LayoutEngine`] owns one taffy node per tree [`NodeId`] and keeps the two
//! trees structurally identical: the tree's mutators call straight into
//! [`LayoutEngine::create_node`], [`LayoutEngine::remove_node`], and
//! [`LayoutEngine::set_children`] before they return.

use std::collections::HashMap;

use taffy::prelude::*;

use crate::geometry::{Point, Rect, Size as GeomSize};
use crate::tree::node::NodeId;
use crate::Result;

use super::resolve::resolve_style;
use super::style::LayoutStyle;

/// Per-edge f32 readback values (margin, padding, border).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Edges {
    pub const ZERO: Edges = Edges { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    pub fn uniform(value: f32) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }

    /// True when all four edges carry the same width.
    pub fn is_uniform(&self) -> bool {
        self.left == self.top && self.top == self.right && self.right == self.bottom
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<taffy::geometry::Rect<f32>> for Edges {
    fn from(rect: taffy::geometry::Rect<f32>) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

/// Computed box model for one node, read back after a layout pass.
///
/// `x`/`y` are relative to the parent's border box, which is how taffy
/// reports child locations. Non-finite values coming out of the layout
/// algorithm are passed through unchanged; callers guard where it matters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
}

impl BoxLayout {
    /// Local bounds, origin at this node's top-left.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Offset from this node's top-left to its content box.
    pub fn content_offset(&self) -> Point {
        Point::new(
            self.border.left + self.padding.left,
            self.border.top + self.padding.top,
        )
    }

    /// Content box size (border and padding subtracted, clamped at zero).
    pub fn content_size(&self) -> GeomSize {
        GeomSize::new(
            (self.width - self.border.horizontal() - self.padding.horizontal()).max(0.0),
            (self.height - self.border.vertical() - self.padding.vertical()).max(0.0),
        )
    }

    /// Local content rectangle.
    pub fn content_rect(&self) -> Rect {
        let offset = self.content_offset();
        let size = self.content_size();
        Rect::new(offset.x, offset.y, size.width, size.height)
    }
}

/// Wraps a [`TaffyTree`] and maps tree [`NodeId`]s to taffy node ids.
pub struct LayoutEngine {
    /// The taffy tree, parameterized with our NodeId as context data so that
    /// the measure callback can reach back to the owning tree node.
    tree: TaffyTree<NodeId>,
    node_map: HashMap<NodeId, taffy::prelude::NodeId>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
        }
    }

    /// Create the taffy node backing a tree node. Called once at node
    /// insertion; creating an id that already exists updates its style.
    pub fn create_node(&mut self, id: NodeId, style: &LayoutStyle) -> Result<()> {
        let taffy_style = resolve_style(style);
        if let Some(&taffy_id) = self.node_map.get(&id) {
            self.tree.set_style(taffy_id, taffy_style)?;
        } else {
            let taffy_id = self.tree.new_leaf_with_context(taffy_style, id)?;
            self.node_map.insert(id, taffy_id);
        }
        Ok(())
    }

    /// Release the taffy node backing a removed tree node.
    pub fn remove_node(&mut self, id: NodeId) {
        if let Some(taffy_id) = self.node_map.remove(&id) {
            let _ = self.tree.remove(taffy_id);
        }
    }

    /// Push a node's current layout style into taffy.
    pub fn set_style(&mut self, id: NodeId, style: &LayoutStyle) -> Result<()> {
        if let Some(&taffy_id) = self.node_map.get(&id) {
            self.tree.set_style(taffy_id, resolve_style(style))?;
        }
        Ok(())
    }

    /// Mirror a parent's child list. Children not yet known to the engine
    /// are skipped.
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<()> {
        let Some(&taffy_parent) = self.node_map.get(&parent) else {
            return Ok(());
        };
        let taffy_children: Vec<taffy::prelude::NodeId> = children
            .iter()
            .filter_map(|child| self.node_map.get(child).copied())
            .collect();
        self.tree.set_children(taffy_parent, &taffy_children)?;
        Ok(())
    }

    /// The engine's child order for a node. Test/debug surface for checking
    /// the mirroring invariant.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let Some(&taffy_id) = self.node_map.get(&id) else {
            return Vec::new();
        };
        let Ok(children) = self.tree.children(taffy_id) else {
            return Vec::new();
        };
        children
            .iter()
            .filter_map(|&child| self.tree.get_node_context(child).copied())
            .collect()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node_map.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    /// Run layout from `root`. `None` for an axis means unconstrained
    /// (max-content) sizing on that axis.
    ///
    /// `measure` is consulted for leaf nodes with no definite size,
    /// receiving the node id, the known dimensions, and the available space.
    pub fn compute<M>(
        &mut self,
        root: NodeId,
        available_width: Option<f32>,
        available_height: Option<f32>,
        mut measure: M,
    ) -> Result<()>
    where
        M: FnMut(
            NodeId,
            taffy::geometry::Size<Option<f32>>,
            taffy::geometry::Size<AvailableSpace>,
        ) -> taffy::geometry::Size<f32>,
    {
        let Some(&taffy_root) = self.node_map.get(&root) else {
            return Ok(());
        };
        let available = taffy::geometry::Size {
            width: available_width
                .map(AvailableSpace::Definite)
                .unwrap_or(AvailableSpace::MaxContent),
            height: available_height
                .map(AvailableSpace::Definite)
                .unwrap_or(AvailableSpace::MaxContent),
        };
        self.tree.compute_layout_with_measure(
            taffy_root,
            available,
            |known, space, _taffy_id, context, _style| match context {
                Some(&mut id) => measure(id, known, space),
                None => taffy::geometry::Size::ZERO,
            },
        )?;
        Ok(())
    }

    /// Read back the computed box model for a node.
    ///
    /// Returns `None` if the node is not in the layout tree.
    pub fn layout(&self, id: NodeId) -> Option<BoxLayout> {
        let taffy_id = self.node_map.get(&id)?;
        let layout = self.tree.layout(*taffy_id).ok()?;
        Some(BoxLayout {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
            margin: layout.margin.into(),
            padding: layout.padding.into(),
            border: layout.border.into(),
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{EdgeInsets, LayoutValue};
    use slotmap::SlotMap;

    /// Helper: mint `n` fresh node ids.
    fn mint_ids(n: usize) -> Vec<NodeId> {
        let mut arena: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    fn no_measure(
        _: NodeId,
        _: taffy::geometry::Size<Option<f32>>,
        _: taffy::geometry::Size<AvailableSpace>,
    ) -> taffy::geometry::Size<f32> {
        taffy::geometry::Size::ZERO
    }

    fn fixed_size(width: f32, height: f32) -> LayoutStyle {
        let mut style = LayoutStyle::new();
        style.width = LayoutValue::Point(width);
        style.height = LayoutValue::Point(height);
        style
    }

    #[test]
    fn new_engine_is_empty() {
        let engine = LayoutEngine::new();
        assert_eq!(engine.node_count(), 0);
    }

    #[test]
    fn create_and_remove_node() {
        let ids = mint_ids(1);
        let mut engine = LayoutEngine::new();
        engine.create_node(ids[0], &LayoutStyle::default()).unwrap();
        assert!(engine.contains(ids[0]));

        engine.remove_node(ids[0]);
        assert!(!engine.contains(ids[0]));
        assert!(engine.layout(ids[0]).is_none());
    }

    #[test]
    fn set_children_mirrors_order() {
        let ids = mint_ids(3);
        let mut engine = LayoutEngine::new();
        for &id in &ids {
            engine.create_node(id, &LayoutStyle::default()).unwrap();
        }
        engine.set_children(ids[0], &[ids[2], ids[1]]).unwrap();
        assert_eq!(engine.children(ids[0]), vec![ids[2], ids[1]]);

        engine.set_children(ids[0], &[ids[1]]).unwrap();
        assert_eq!(engine.children(ids[0]), vec![ids[1]]);
    }

    #[test]
    fn compute_column_layout() {
        let ids = mint_ids(3);
        let mut engine = LayoutEngine::new();
        engine.create_node(ids[0], &fixed_size(100.0, 200.0)).unwrap();

        let mut child = LayoutStyle::new();
        child.height = LayoutValue::Point(50.0);
        engine.create_node(ids[1], &child).unwrap();

        let mut child = LayoutStyle::new();
        child.height = LayoutValue::Point(70.0);
        engine.create_node(ids[2], &child).unwrap();

        engine.set_children(ids[0], &[ids[1], ids[2]]).unwrap();
        engine
            .compute(ids[0], Some(100.0), Some(200.0), no_measure)
            .unwrap();

        let root = engine.layout(ids[0]).unwrap();
        assert_eq!(root.width, 100.0);
        assert_eq!(root.height, 200.0);

        let a = engine.layout(ids[1]).unwrap();
        assert_eq!(a.y, 0.0);
        assert_eq!(a.height, 50.0);

        let b = engine.layout(ids[2]).unwrap();
        assert_eq!(b.y, 50.0);
        assert_eq!(b.height, 70.0);
    }

    #[test]
    fn compute_flex_grow_row_with_padding() {
        let ids = mint_ids(3);
        let mut engine = LayoutEngine::new();

        let mut root = fixed_size(300.0, 200.0);
        root.flex_direction = crate::layout::style::FlexDirection::Row;
        root.padding = EdgeInsets::all(10.0);
        engine.create_node(ids[0], &root).unwrap();

        let mut a = LayoutStyle::new();
        a.flex_grow = 1.0;
        engine.create_node(ids[1], &a).unwrap();

        let mut b = LayoutStyle::new();
        b.flex_grow = 2.0;
        engine.create_node(ids[2], &b).unwrap();

        engine.set_children(ids[0], &[ids[1], ids[2]]).unwrap();
        engine
            .compute(ids[0], Some(300.0), Some(200.0), no_measure)
            .unwrap();

        let a = engine.layout(ids[1]).unwrap();
        let b = engine.layout(ids[2]).unwrap();
        // 280 available after padding, split 1:2.
        assert!((a.width - 280.0 / 3.0).abs() < 0.5);
        assert!((b.width - 560.0 / 3.0).abs() < 0.5);
        assert_eq!(a.x, 10.0);
    }

    #[test]
    fn padding_and_border_readback() {
        let ids = mint_ids(1);
        let mut engine = LayoutEngine::new();
        let mut style = fixed_size(100.0, 100.0);
        style.padding = EdgeInsets::all(8.0);
        style.border = EdgeInsets::all(2.0);
        engine.create_node(ids[0], &style).unwrap();
        engine
            .compute(ids[0], Some(100.0), Some(100.0), no_measure)
            .unwrap();

        let layout = engine.layout(ids[0]).unwrap();
        assert_eq!(layout.padding, Edges::uniform(8.0));
        assert_eq!(layout.border, Edges::uniform(2.0));
        assert_eq!(layout.content_offset(), Point::new(10.0, 10.0));
        assert_eq!(layout.content_size(), GeomSize::new(80.0, 80.0));
    }

    #[test]
    fn set_style_updates_computed_layout() {
        let ids = mint_ids(1);
        let mut engine = LayoutEngine::new();
        engine.create_node(ids[0], &fixed_size(50.0, 50.0)).unwrap();
        engine.compute(ids[0], None, None, no_measure).unwrap();
        assert_eq!(engine.layout(ids[0]).unwrap().width, 50.0);

        engine.set_style(ids[0], &fixed_size(120.0, 40.0)).unwrap();
        engine.compute(ids[0], None, None, no_measure).unwrap();
        let layout = engine.layout(ids[0]).unwrap();
        assert_eq!(layout.width, 120.0);
        assert_eq!(layout.height, 40.0);
    }

    #[test]
    fn measure_sizes_auto_leaf() {
        let ids = mint_ids(2);
        let mut engine = LayoutEngine::new();
        let mut root = fixed_size(200.0, 200.0);
        root.align_items = crate::layout::style::AlignItems::FlexStart;
        engine.create_node(ids[0], &root).unwrap();
        engine.create_node(ids[1], &LayoutStyle::default()).unwrap();
        engine.set_children(ids[0], &[ids[1]]).unwrap();

        let measured = ids[1];
        engine
            .compute(ids[0], Some(200.0), Some(200.0), move |id, _, _| {
                if id == measured {
                    taffy::geometry::Size { width: 42.0, height: 17.0 }
                } else {
                    taffy::geometry::Size::ZERO
                }
            })
            .unwrap();

        let leaf_layout = engine.layout(ids[1]).unwrap();
        assert_eq!(leaf_layout.width, 42.0);
        assert_eq!(leaf_layout.height, 17.0);
    }

    #[test]
    fn auto_available_space_sizes_to_content() {
        let ids = mint_ids(1);
        let mut engine = LayoutEngine::new();
        engine.create_node(ids[0], &fixed_size(64.0, 32.0)).unwrap();
        engine.compute(ids[0], None, None, no_measure).unwrap();
        let layout = engine.layout(ids[0]).unwrap();
        assert_eq!(layout.width, 64.0);
        assert_eq!(layout.height, 32.0);
    }

    #[test]
    fn layout_nonexistent_is_none() {
        let engine = LayoutEngine::new();
        let ids = mint_ids(1);
        assert!(engine.layout(ids[0]).is_none());
    }

    #[test]
    fn edges_uniformity() {
        assert!(Edges::uniform(3.0).is_uniform());
        assert!(Edges::ZERO.is_uniform());
        let mixed = Edges { left: 1.0, top: 2.0, right: 1.0, bottom: 1.0 };
        assert!(!mixed.is_uniform());
        assert_eq!(mixed.horizontal(), 2.0);
        assert_eq!(mixed.vertical(), 3.0);
    }
}
