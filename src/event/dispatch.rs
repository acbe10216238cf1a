//! Event dispatch: routes window-level input to tree nodes.
//!
//! The dispatcher owns the cross-event interaction state the tree itself
//! does not track: which node the cursor is over, which holds keyboard
//! focus, and which is mid-press. Events are delivered with positions in
//! the target node's local coordinate space.

use crate::geometry::Point;
use crate::tree::{NodeId, Tree};

use super::input::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};

/// Interaction state carried between events.
#[derive(Default)]
pub struct DispatchContext {
    hovered: Option<NodeId>,
    focused: Option<NodeId>,
    pressed: Option<NodeId>,
    cursor: Point,
    modifiers: Modifiers,
}

impl DispatchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    fn local(&self, tree: &Tree, id: NodeId, position: Point) -> Point {
        match tree.absolute_origin(id) {
            Some(origin) => position - origin,
            None => position,
        }
    }

    fn send(&self, tree: &mut Tree, id: NodeId, kind: MouseEventKind, position: Point) {
        let event = MouseEvent::new(kind, self.local(tree, id, position))
            .with_modifiers(self.modifiers);
        tree.deliver_mouse(id, &event);
    }

    /// Route a cursor move: enter/exit pairs on hover change, then a move to
    /// the node under the cursor. Stale hover targets are dropped silently.
    pub fn dispatch_cursor_moved(&mut self, tree: &mut Tree, position: Point) {
        self.cursor = position;
        let target = tree.hit_test(position);
        if target != self.hovered {
            if let Some(old) = self.hovered.filter(|&id| tree.contains(id)) {
                self.send(tree, old, MouseEventKind::Exited, position);
            }
            if let Some(new) = target {
                self.send(tree, new, MouseEventKind::Entered, position);
            }
            self.hovered = target;
        }
        if let Some(id) = self.hovered {
            self.send(tree, id, MouseEventKind::Moved, position);
        }
    }

    /// Route a button press or release at the current cursor position.
    ///
    /// Press records the target; release on the same node synthesizes a
    /// `Clicked` after the `Released`. Focus moves on release: to the target
    /// if it accepts focus, away from the old holder otherwise.
    pub fn dispatch_mouse_button(&mut self, tree: &mut Tree, button: MouseButton, pressed: bool) {
        let position = self.cursor;
        let target = tree.hit_test(position);

        if pressed {
            if let Some(id) = target {
                self.send(tree, id, MouseEventKind::Pressed(button), position);
            }
            if button == MouseButton::Left {
                self.pressed = target;
            }
            return;
        }

        if let Some(id) = target {
            self.send(tree, id, MouseEventKind::Released(button), position);
        }
        if button != MouseButton::Left {
            return;
        }
        let clicked = self.pressed.take().filter(|&id| target == Some(id));
        if let Some(id) = clicked {
            self.send(tree, id, MouseEventKind::Clicked(MouseButton::Left), position);
        }

        // Focus follows completed left clicks.
        let focus_target = clicked
            .or(target)
            .filter(|&id| tree.get(id).is_some_and(|node| node.widget.can_focus()));
        if focus_target != self.focused {
            if let Some(old) = self.focused.filter(|&id| tree.contains(id)) {
                tree.deliver_focus(old, false);
            }
            if let Some(new) = focus_target {
                tree.deliver_focus(new, true);
            }
            self.focused = focus_target;
        }
    }

    /// Route a scroll to the hovered node.
    pub fn dispatch_scroll(&mut self, tree: &mut Tree, dx: f32, dy: f32) {
        if let Some(id) = self.hovered.filter(|&id| tree.contains(id)) {
            self.send(tree, id, MouseEventKind::Scrolled { dx, dy }, self.cursor);
        }
    }

    /// Route a key to the focused node. Escape blurs instead of delivering.
    ///
    /// The tracked modifier state is folded into the event, so shortcuts
    /// work when the window reports modifiers separately from keys.
    pub fn dispatch_key(&mut self, tree: &mut Tree, event: KeyEvent) {
        if event.key == Key::Escape {
            self.blur(tree);
            return;
        }
        if let Some(id) = self.focused.filter(|&id| tree.contains(id)) {
            let event = KeyEvent::with_modifiers(event.key, event.modifiers | self.modifiers);
            tree.deliver_key(id, &event);
        }
    }

    /// Drop keyboard focus, notifying the current holder.
    pub fn blur(&mut self, tree: &mut Tree) {
        if let Some(id) = self.focused.take().filter(|&id| tree.contains(id)) {
            tree.deliver_focus(id, false);
        }
    }

    /// Forget any state pointing at removed nodes.
    pub fn prune(&mut self, tree: &Tree) {
        if self.hovered.is_some_and(|id| !tree.contains(id)) {
            self.hovered = None;
        }
        if self.focused.is_some_and(|id| !tree.contains(id)) {
            self.focused = None;
        }
        if self.pressed.is_some_and(|id| !tree.contains(id)) {
            self.pressed = None;
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
