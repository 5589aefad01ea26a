// crates/pplx-rs/src/tree.rs

//! Arena-backed entity tree.
//!
//! Nodes are addressed by `NodeId`. Each node owns an ordered list of child
//! ids; the parent link is a non-owning back-reference.

use crate::entity::{Entity, Schema};
use crate::error::StructuralError;
use log::debug;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Index of a node inside one `EntityTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Process-unique identity of an entity, stable for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl EntityId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        EntityId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
struct Slot {
    id: EntityId,
    entity: Box<dyn Entity>,
    description: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An entity tree with a fixed root.
///
/// Nodes are created detached with `insert` and attached with `add_child`,
/// which enforces the parent type's legality predicate and single ownership.
#[derive(Debug)]
pub struct EntityTree {
    slots: Vec<Option<Slot>>,
    root: NodeId,
}

impl EntityTree {
    /// Creates a tree whose root is `root`.
    pub fn new<T: Entity>(root: T) -> Self {
        Self::with_root(Box::new(root))
    }

    pub fn with_root(root: Box<dyn Entity>) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.insert_boxed(root);
        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds a detached node to the arena.
    pub fn insert<T: Entity>(&mut self, entity: T) -> NodeId {
        self.insert_boxed(Box::new(entity))
    }

    pub fn insert_boxed(&mut self, entity: Box<dyn Entity>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Some(Slot {
            id: EntityId::next(),
            entity,
            description: None,
            parent: None,
            children: Vec::new(),
        }));
        id
    }

    fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entity(&self, id: NodeId) -> Option<&(dyn Entity + 'static)> {
        self.slot(id).map(|slot| slot.entity.as_ref())
    }

    pub fn entity_mut(&mut self, id: NodeId) -> Option<&mut (dyn Entity + 'static)> {
        self.slot_mut(id).map(|slot| slot.entity.as_mut())
    }

    /// Typed access to a node's concrete entity.
    pub fn get<T: Schema>(&self, id: NodeId) -> Option<&T> {
        self.entity(id)?.downcast_ref::<T>()
    }

    pub fn get_mut<T: Schema>(&mut self, id: NodeId) -> Option<&mut T> {
        self.entity_mut(id)?.downcast_mut::<T>()
    }

    pub fn entity_id(&self, id: NodeId) -> Option<EntityId> {
        self.slot(id).map(|slot| slot.id)
    }

    /// The description override if one is set, otherwise the type's tag.
    pub fn description(&self, id: NodeId) -> Option<&str> {
        self.slot(id).map(|slot| {
            slot.description
                .as_deref()
                .unwrap_or_else(|| slot.entity.xml_key())
        })
    }

    pub fn set_description(
        &mut self,
        id: NodeId,
        description: Option<String>,
    ) -> Result<(), StructuralError> {
        let slot = self.slot_mut(id).ok_or(StructuralError::UnknownNode(id))?;
        slot.description = description;
        Ok(())
    }

    /// The recorded parent link.
    ///
    /// `remove_child` does not clear this link, so a removed node still reports
    /// its former parent. Use `is_attached` to know whether it is currently owned.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id)?.parent
    }

    /// Children of `id` in insertion order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id)
            .map(|slot| slot.children.as_slice())
            .unwrap_or_default()
    }

    /// The parent that currently lists `id` as a child.
    pub fn owner(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.children(parent).contains(&id).then_some(parent)
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.owner(id).is_some()
    }

    /// Attaches `child` as the last child of `parent`.
    ///
    /// Fails without changing the tree if the parent's type does not accept the
    /// child's type, the child is already owned, the child is the root, or the
    /// child is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), StructuralError> {
        let parent_entity = self
            .entity(parent)
            .ok_or(StructuralError::UnknownNode(parent))?;
        let child_entity = self
            .entity(child)
            .ok_or(StructuralError::UnknownNode(child))?;

        if !parent_entity.is_legal_child(child_entity.kind()) {
            return Err(StructuralError::IllegalChild {
                parent: parent_entity.xml_key(),
                child: child_entity.xml_key(),
            });
        }
        if child == self.root {
            return Err(StructuralError::RootAsChild);
        }
        if let Some(owner) = self.owner(child) {
            return Err(StructuralError::AlreadyAttached {
                child,
                parent: owner,
            });
        }
        let mut ancestor = Some(parent);
        while let Some(node) = ancestor {
            if node == child {
                return Err(StructuralError::Cycle { parent, child });
            }
            ancestor = self.owner(node);
        }

        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(child);
        }
        if let Some(slot) = self.slot_mut(child) {
            slot.parent = Some(parent);
        }
        Ok(())
    }

    /// Removes `child` from `parent`'s child list, preserving the order of the
    /// remaining children. The child's parent link is left as it was.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), StructuralError> {
        let slot = self
            .slot_mut(parent)
            .ok_or(StructuralError::UnknownNode(parent))?;
        let position = slot
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(StructuralError::NotAChild { parent, child })?;
        slot.children.remove(position);
        Ok(())
    }

    /// Node ids in depth-first pre-order, starting at the root.
    pub fn depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Frees every node not reachable from the root: removed subtrees and nodes
    /// that were inserted but never attached. Returns the number freed.
    ///
    /// Freed ids are never reused, so a stale `NodeId` keeps reporting
    /// `UnknownNode` instead of aliasing a later node. The arena keeps one empty
    /// slot per freed node for the lifetime of the tree.
    pub fn collect_orphans(&mut self) -> usize {
        let mut reachable = vec![false; self.slots.len()];
        for id in self.depth_first() {
            reachable[id.0] = true;
        }

        let mut freed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_some() && !reachable[index] {
                *slot = None;
                freed += 1;
            }
        }
        if freed > 0 {
            debug!("Collected {} orphaned node(s)", freed);
        }
        freed
    }
}
