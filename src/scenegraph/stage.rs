use slotmap::SlotMap;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::scenegraph::{Graphics, Text};

slotmap::new_key_type! {
    /// Handle to a display object held by a [`Stage`].
    pub struct NodeId;
}

/// What a display object draws for itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayKind {
    /// Draws nothing itself; owns an ordered child list.
    Container,
    Graphics(Graphics),
    Text(Text),
}

/// One node of the retained tree.
///
/// `parent` is a non-owning back-reference: ownership flows from the stage
/// and the parent's child list, never from child to parent.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayObject {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: DisplayKind,
}

impl DisplayObject {
    #[must_use]
    pub fn new(kind: DisplayKind) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            visible: true,
            parent: None,
            children: Vec::new(),
            kind,
        }
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in paint order, back to front.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn kind(&self) -> &DisplayKind {
        &self.kind
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.kind, DisplayKind::Container)
    }
}

/// Arena holding every display object of a retained scene.
#[derive(Debug, Default)]
pub struct Stage {
    nodes: SlotMap<NodeId, DisplayObject>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: DisplayObject) -> NodeId {
        self.nodes.insert(object)
    }

    pub fn create_container(&mut self) -> NodeId {
        self.insert(DisplayObject::new(DisplayKind::Container))
    }

    pub fn create_graphics(&mut self) -> NodeId {
        self.insert(DisplayObject::new(DisplayKind::Graphics(Graphics::new())))
    }

    pub fn create_text(&mut self, text: Text) -> NodeId {
        self.insert(DisplayObject::new(DisplayKind::Text(text)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&DisplayObject> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut DisplayObject> {
        self.nodes.get_mut(id)
    }

    fn node(&self, id: NodeId) -> ChartResult<&DisplayObject> {
        self.nodes.get(id).ok_or(ChartError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> ChartResult<&mut DisplayObject> {
        self.nodes.get_mut(id).ok_or(ChartError::UnknownNode(id))
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(DisplayObject::parent)
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id) {
            Some(node) => node.children(),
            None => &[],
        }
    }

    pub fn graphics(&self, id: NodeId) -> ChartResult<&Graphics> {
        match &self.node(id)?.kind {
            DisplayKind::Graphics(graphics) => Ok(graphics),
            _ => Err(ChartError::InvalidData(format!(
                "display object {id:?} is not a graphics node"
            ))),
        }
    }

    pub fn graphics_mut(&mut self, id: NodeId) -> ChartResult<&mut Graphics> {
        match &mut self.node_mut(id)?.kind {
            DisplayKind::Graphics(graphics) => Ok(graphics),
            _ => Err(ChartError::InvalidData(format!(
                "display object {id:?} is not a graphics node"
            ))),
        }
    }

    pub fn text_mut(&mut self, id: NodeId) -> ChartResult<&mut Text> {
        match &mut self.node_mut(id)?.kind {
            DisplayKind::Text(text) => Ok(text),
            _ => Err(ChartError::InvalidData(format!(
                "display object {id:?} is not a text node"
            ))),
        }
    }

    pub fn set_position(&mut self, id: NodeId, x: f64, y: f64) -> ChartResult<()> {
        let node = self.node_mut(id)?;
        node.x = x;
        node.y = y;
        Ok(())
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> ChartResult<()> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    /// Appends `child` to `parent`'s child list.
    ///
    /// A child that already has a parent (including `parent` itself) is
    /// detached first, so it ends up exactly once, last in paint order.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> ChartResult<()> {
        if !self.node(parent)?.is_container() {
            return Err(ChartError::InvalidData(format!(
                "display object {parent:?} cannot hold children"
            )));
        }
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(ChartError::InvalidData(format!(
                "adding {child:?} under {parent:?} would create a cycle"
            )));
        }

        if let Some(previous) = self.node(child)?.parent {
            self.detach(previous, child);
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        trace!(?parent, ?child, "add child");
        Ok(())
    }

    pub fn add_children(&mut self, parent: NodeId, children: &[NodeId]) -> ChartResult<()> {
        for child in children {
            self.add_child(parent, *child)?;
        }
        Ok(())
    }

    /// Removes `child` from `parent`. Returns `false` (and changes nothing)
    /// when `child` is not currently a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(parent, child);
        true
    }

    /// Detaches every child of `parent`, returning them in former paint order.
    pub fn remove_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.get_mut(parent) else {
            return Vec::new();
        };
        let removed = std::mem::take(&mut node.children);
        for child in &removed {
            if let Some(child) = self.nodes.get_mut(*child) {
                child.parent = None;
            }
        }
        removed
    }

    /// Removes one node from the stage.
    ///
    /// Its children stay alive as detached roots so handles held elsewhere
    /// remain valid.
    pub fn destroy(&mut self, id: NodeId) -> Option<DisplayObject> {
        if let Some(parent) = self.parent(id) {
            self.detach(parent, id);
        }
        self.remove_children(id);
        self.nodes.remove(id)
    }

    /// Removes a node and every descendant.
    pub fn destroy_subtree(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            self.detach(parent, id);
        }
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
            }
        }
    }

    /// Number of visible nodes reachable from `root`, root included.
    #[must_use]
    pub fn visible_count(&self, root: NodeId) -> usize {
        let Some(node) = self.nodes.get(root) else {
            return 0;
        };
        if !node.visible {
            return 0;
        }
        1 + node
            .children
            .iter()
            .map(|child| self.visible_count(*child))
            .sum::<usize>()
    }

    fn detach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|id| *id != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == candidate {
                return true;
            }
            match self.parent(node) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }
}
