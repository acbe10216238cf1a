//! The widget tree: structure, dirty tracking, layout, paint walk, hit test.
//!
//! All nodes live in a single `SlotMap` arena. Parent/child relationships are
//! stored in secondary maps so that removal is O(subtree size) and lookup is
//! O(1). The tree owns the [`LayoutEngine`] and keeps it structurally
//! identical to itself: every mutator mirrors its change into the engine
//! before returning.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use crate::event::{KeyEvent, MouseEvent};
use crate::geometry::{Point, Rect};
use crate::layout::{BoxLayout, LayoutEngine, LayoutStyle, Overflow};
use crate::render::Painter;
use crate::style::VisualStyle;

use super::node::{NodeData, NodeId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

pub struct Tree {
    nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
    engine: LayoutEngine,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            engine: LayoutEngine::new(),
        }
    }

    // ── Structure ────────────────────────────────────────────────────

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let layout = data.layout.clone();
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        let _ = self.engine.create_node(id, &layout);
        if self.root.is_none() {
            self.root = Some(id);
        }
        self.mark_dirty(id);
        id
    }

    /// Insert a new node as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.insert(data);
        self.add_child(parent, id);
        id
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is detached from it first, so
    /// re-parenting is safe and idempotent. Attaching a node to its current
    /// parent moves it to the end of the child list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_child_at(parent, child, usize::MAX);
    }

    /// Attach `child` at `index` in `parent`'s child list. The index is
    /// clamped to the list length.
    pub fn insert_child_at(&mut self, parent: NodeId, child: NodeId, index: usize) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) || parent == child {
            return;
        }

        self.detach(child);

        self.parent.insert(child, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            let index = index.min(siblings.len());
            siblings.insert(index, child);
        }
        if self.root == Some(child) {
            self.root = None;
        }

        self.mirror_children(parent);
        self.mark_dirty(parent);
    }

    /// Detach `child` from `parent`, keeping it (and its subtree) alive as a
    /// floating node. No-op if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.parent.get(child).copied() != Some(parent) {
            return;
        }
        self.detach(child);
        self.mirror_children(parent);
        self.mark_dirty(parent);
    }

    /// Detach every child of `parent`, keeping them alive as floating nodes.
    pub fn remove_all_children(&mut self, parent: NodeId) {
        let kids: Vec<NodeId> = self.children(parent).to_vec();
        for child in kids {
            self.detach(child);
        }
        self.mirror_children(parent);
        self.mark_dirty(parent);
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns `false` if the node did not exist.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }

        let old_parent = self.parent.get(id).copied();
        self.detach(id);
        if let Some(parent) = old_parent {
            self.mirror_children(parent);
            self.mark_dirty(parent);
        }
        if self.root == Some(id) {
            self.root = None;
        }

        // BFS over the subtree, releasing arena slots and engine nodes.
        let mut queue = VecDeque::new();
        queue.push_back(id);
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            self.nodes.remove(current);
            self.engine.remove_node(current);
        }
        true
    }

    /// Remove a node from its parent's child list without touching the
    /// arena. Does not re-mirror; callers do that once per mutator.
    fn detach(&mut self, id: NodeId) {
        if let Some(old_parent) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&sibling| sibling != id);
            }
            self.mirror_children(old_parent);
            self.mark_dirty(old_parent);
        }
    }

    fn mirror_children(&mut self, parent: NodeId) {
        let kids: Vec<NodeId> = self.children(parent).to_vec();
        let _ = self.engine.set_children(parent, &kids);
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// The children of a node. Empty slice if the node has none or does not
    /// exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// The child at `index`, or `None` when out of range.
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    /// Ancestor chain from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent.get(current).copied() {
            result.push(parent);
            current = parent;
        }
        result
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// Downcast a node's widget to a concrete type.
    pub fn widget<W: 'static>(&self, id: NodeId) -> Option<&W> {
        self.nodes.get(id)?.widget.as_any().downcast_ref()
    }

    /// Downcast a node's widget to a concrete type, mutably.
    pub fn widget_mut<W: 'static>(&mut self, id: NodeId) -> Option<&mut W> {
        self.nodes.get_mut(id)?.widget.as_any_mut().downcast_mut()
    }

    #[cfg(test)]
    pub(crate) fn engine_children(&self, id: NodeId) -> Vec<NodeId> {
        self.engine.children(id)
    }

    // ── Dirty tracking ───────────────────────────────────────────────

    /// Mark a node dirty and bubble the flag to the root, so the window
    /// bridge only has to poll the root before a frame.
    pub fn mark_dirty(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.dirty = true;
        }
        let mut current = id;
        while let Some(parent) = self.parent.get(current).copied() {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.dirty = true;
            }
            current = parent;
        }
    }

    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.nodes.get(id).map(|node| node.dirty).unwrap_or(false)
    }

    pub fn is_styles_dirty(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .map(|node| node.styles_dirty)
            .unwrap_or(false)
    }

    pub fn clear_dirty(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.dirty = false;
            node.styles_dirty = false;
        }
    }

    /// Clear every node's dirty flags. Called once per render cycle after a
    /// layout pass completes.
    pub fn clear_dirty_all(&mut self) {
        for node in self.nodes.values_mut() {
            node.dirty = false;
            node.styles_dirty = false;
        }
    }

    // ── Styles ───────────────────────────────────────────────────────

    pub fn layout_style(&self, id: NodeId) -> Option<&LayoutStyle> {
        self.nodes.get(id).map(|node| &node.layout)
    }

    /// Mutate a node's layout style, push it into the engine, and mark the
    /// node dirty.
    pub fn update_layout_style(&mut self, id: NodeId, update: impl FnOnce(&mut LayoutStyle)) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        update(&mut node.layout);
        let layout = node.layout.clone();
        let _ = self.engine.set_style(id, &layout);
        self.mark_dirty(id);
    }

    pub fn style(&self, id: NodeId) -> Option<&VisualStyle> {
        self.nodes.get(id).map(|node| &node.style)
    }

    /// Mutate a node's visual style, setting the styles-dirty flag and
    /// marking the node dirty.
    pub fn update_style(&mut self, id: NodeId, update: impl FnOnce(&mut VisualStyle)) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        update(&mut node.style);
        node.styles_dirty = true;
        self.mark_dirty(id);
    }

    // ── Layout ───────────────────────────────────────────────────────

    /// Run the layout engine from the root. `None` for an axis means
    /// unconstrained sizing on that axis.
    ///
    /// Leaf measurement routes through each node's [`crate::widget::Widget::measure`] hook.
    pub fn compute_layout(&mut self, available_width: Option<f32>, available_height: Option<f32>) {
        let Some(root) = self.root else {
            return;
        };
        let nodes = &self.nodes;
        let _ = self
            .engine
            .compute(root, available_width, available_height, |id, known, _| {
                match nodes.get(id) {
                    Some(node) => {
                        let size =
                            node.widget
                                .measure(&node.style, &node.layout, known.width, known.height);
                        taffy::geometry::Size {
                            width: size.width,
                            height: size.height,
                        }
                    }
                    None => taffy::geometry::Size::ZERO,
                }
            });
    }

    /// The computed box model of a node, valid after [`Tree::compute_layout`].
    pub fn layout(&self, id: NodeId) -> Option<BoxLayout> {
        self.engine.layout(id)
    }

    /// A node's top-left corner in root coordinates: the sum of taffy
    /// locations along the ancestor chain.
    pub fn absolute_origin(&self, id: NodeId) -> Option<Point> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        let mut origin = Point::ZERO;
        let mut current = Some(id);
        while let Some(node) = current {
            let layout = self.engine.layout(node)?;
            origin = origin + Point::new(layout.x, layout.y);
            current = self.parent(node);
        }
        Some(origin)
    }

    // ── Paint ────────────────────────────────────────────────────────

    /// The recursive paint walk, preorder: save, translate to the node's
    /// corner, clip if overflow is hidden, paint the node's own box, then
    /// recurse into visible children in child order, restore.
    ///
    /// Taffy reports child locations relative to the parent's border box;
    /// since the walk descends into content space (border plus padding), each
    /// child's translation is compensated by the parent's content offset so
    /// absolute positions match the engine exactly.
    pub fn render_tree(&self, painter: &mut dyn Painter) {
        if let Some(root) = self.root {
            self.render_node(root, painter, Point::ZERO);
        }
    }

    fn render_node(&self, id: NodeId, painter: &mut dyn Painter, parent_content: Point) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if node.layout.is_hidden() {
            return;
        }
        let Some(layout) = self.engine.layout(id) else {
            return;
        };

        painter.save();
        painter.translate(layout.x - parent_content.x, layout.y - parent_content.y);

        if node.layout.overflow_x == Overflow::Hidden || node.layout.overflow_y == Overflow::Hidden
        {
            painter.clip_rect(Rect::new(0.0, 0.0, layout.width, layout.height));
        }

        node.widget.render(painter, &layout, &node.style);

        let content = layout.content_offset();
        painter.translate(content.x, content.y);
        for &child in self.children(id) {
            self.render_node(child, painter, content);
        }

        painter.restore();
    }

    // ── Hit testing and event delivery ───────────────────────────────

    /// Deepest node under `point` (root coordinates). Later siblings paint
    /// on top, so children are tested in reverse order.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        let root = self.root?;
        self.hit_test_node(root, point, Point::ZERO)
    }

    fn hit_test_node(&self, id: NodeId, point: Point, origin: Point) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if node.layout.is_hidden() {
            return None;
        }
        let layout = self.engine.layout(id)?;
        let abs = Point::new(origin.x + layout.x, origin.y + layout.y);
        if !Rect::new(abs.x, abs.y, layout.width, layout.height).contains(point) {
            return None;
        }
        for &child in self.children(id).iter().rev() {
            if let Some(hit) = self.hit_test_node(child, point, abs) {
                return Some(hit);
            }
        }
        Some(id)
    }

    /// Route a mouse event to a node's widget. Marks the node dirty when the
    /// widget reports a visual change; returns that flag.
    pub fn deliver_mouse(&mut self, id: NodeId, event: &MouseEvent) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let changed = node.widget.on_mouse(event, &mut node.style);
        if changed {
            node.styles_dirty = true;
            self.mark_dirty(id);
        }
        changed
    }

    /// Route a key event to a node's widget.
    pub fn deliver_key(&mut self, id: NodeId, event: &KeyEvent) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let changed = node.widget.on_key(event, &mut node.style);
        if changed {
            node.styles_dirty = true;
            self.mark_dirty(id);
        }
        changed
    }

    /// Notify a node's widget of a focus change.
    pub fn deliver_focus(&mut self, id: NodeId, focused: bool) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let changed = node.widget.on_focus_changed(focused, &mut node.style);
        if changed {
            node.styles_dirty = true;
            self.mark_dirty(id);
        }
        changed
    }

    /// Clock tick for widgets with time-driven visuals (cursor blink).
    /// Returns true if any node changed.
    pub fn tick(&mut self) -> bool {
        let mut changed_nodes = Vec::new();
        for (id, node) in self.nodes.iter_mut() {
            if node.widget.on_tick() {
                node.dirty = true;
                changed_nodes.push(id);
            }
        }
        for id in &changed_nodes {
            self.mark_dirty(*id);
        }
        !changed_nodes.is_empty()
    }

    // ── Debug ────────────────────────────────────────────────────────

    /// Write an indented dump of the computed layout tree through the log
    /// facade, at debug level.
    pub fn dump_layout(&self) {
        match self.root {
            Some(root) => self.dump_node(root, 0),
            None => log::debug!("layout: <empty tree>"),
        }
    }

    fn dump_node(&self, id: NodeId, depth: usize) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let indent = depth * 2;
        match self.engine.layout(id) {
            Some(layout) => log::debug!(
                "{:indent$}{} ({:.1}, {:.1}) {:.1}x{:.1}",
                "",
                node.widget_type(),
                layout.x,
                layout.y,
                layout.width,
                layout.height,
            ),
            None => log::debug!("{:indent$}{} <no layout>", "", node.widget_type()),
        }
        for &child in self.children(id) {
            self.dump_node(child, depth + 1);
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
