//! Render grouping component (master/slave relation).
//!
//! A renderable can be *slaved* to a sprite-bearing master so that related
//! entities are managed as one visual unit (effects attached to a sprite,
//! for example) without merging their update logic. Both sides of the
//! relation are plain [`Entity`] handles: the component never owns the
//! other renderable and a dangling handle is tolerated by every operation.
//!
//! The relation is maintained through
//! [`set_master`](crate::systems::rendergroup::set_master) and
//! [`unset_master`](crate::systems::rendergroup::unset_master), which keep
//! the master's slave list and the slave's back-reference in sync. A
//! component may be a master to many slaves while itself being slaved to
//! one master.

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// Master/slave relation endpoints of one renderable.
#[derive(Component, Clone, Debug, Default)]
pub struct RenderGroup {
    /// The renderable this component defers to, if any. Non-owning.
    master: Option<Entity>,
    /// Renderables this component represents. Non-owning.
    slaves: SmallVec<[Entity; 4]>,
}

impl RenderGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a master is currently set.
    pub fn is_slaved(&self) -> bool {
        self.master.is_some()
    }

    pub fn master(&self) -> Option<Entity> {
        self.master
    }

    pub fn slaves(&self) -> &[Entity] {
        &self.slaves
    }

    /// Record the master handle. Relation bookkeeping on the master side is
    /// the caller's job.
    pub(crate) fn set_master_handle(&mut self, master: Entity) {
        self.master = Some(master);
    }

    pub(crate) fn clear_master_handle(&mut self) {
        self.master = None;
    }

    /// Register a slaved renderable.
    pub fn add_slave(&mut self, slave: Entity) {
        if !self.slaves.contains(&slave) {
            self.slaves.push(slave);
        }
    }

    /// Deregister a slaved renderable. Removing an absent entry is a no-op.
    pub fn remove_slave(&mut self, slave: Entity) {
        if let Some(index) = self.slaves.iter().position(|s| *s == slave) {
            self.slaves.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn entities(world: &mut World, n: usize) -> Vec<Entity> {
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_new_group_is_not_slaved() {
        let group = RenderGroup::new();
        assert!(!group.is_slaved());
        assert!(group.slaves().is_empty());
    }

    #[test]
    fn test_add_slave_ignores_duplicates() {
        let mut world = World::new();
        let ids = entities(&mut world, 1);
        let mut group = RenderGroup::new();
        group.add_slave(ids[0]);
        group.add_slave(ids[0]);
        assert_eq!(group.slaves().len(), 1);
    }

    #[test]
    fn test_remove_absent_slave_is_noop() {
        let mut world = World::new();
        let ids = entities(&mut world, 2);
        let mut group = RenderGroup::new();
        group.add_slave(ids[0]);
        group.remove_slave(ids[1]);
        assert_eq!(group.slaves(), &[ids[0]]);
    }

    #[test]
    fn test_master_handle_roundtrip() {
        let mut world = World::new();
        let ids = entities(&mut world, 1);
        let mut group = RenderGroup::new();
        group.set_master_handle(ids[0]);
        assert!(group.is_slaved());
        assert_eq!(group.master(), Some(ids[0]));
        group.clear_master_handle();
        assert!(!group.is_slaved());
    }
}
