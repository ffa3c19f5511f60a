//! Thread-safe access to one registry.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ResourceRegistry;

/// Registry shared between the analysis pass and tooling threads.
///
/// A single lock covers every index, so a reader holding `read()` never
/// sees a registration half applied.
#[derive(Clone, Default)]
pub struct SharedResourceRegistry(Arc<RwLock<ResourceRegistry>>);

impl SharedResourceRegistry {
    /// Wrap an owned registry.
    pub fn new(registry: ResourceRegistry) -> Self {
        SharedResourceRegistry(Arc::new(RwLock::new(registry)))
    }

    /// Get read access to the registry.
    pub fn read(&self) -> RwLockReadGuard<'_, ResourceRegistry> {
        self.0.read()
    }

    /// Get write access to the registry.
    pub fn write(&self) -> RwLockWriteGuard<'_, ResourceRegistry> {
        self.0.write()
    }
}

impl fmt::Debug for SharedResourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedResourceRegistry({:?})", &*self.0.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectiveResources, Resource};
    use sprig_ir::{DeclId, NodeId, PathInterner};

    #[test]
    fn writes_are_visible_through_clones() {
        let paths = PathInterner::new();
        let html = paths.intern("/app/cmp.html");
        let shared = SharedResourceRegistry::default();
        let tooling = shared.clone();

        shared.write().register_resources(
            DirectiveResources::component(Resource::external(html, NodeId::new(0))),
            DeclId::new(1),
        );

        assert!(tooling
            .read()
            .components_with_template(html)
            .contains(&DeclId::new(1)));
    }

    #[test]
    fn registration_from_another_thread() {
        let shared = SharedResourceRegistry::new(ResourceRegistry::new());
        let writer = shared.clone();

        let handle = std::thread::spawn(move || {
            writer.write().register_resources(
                DirectiveResources::directive().with_styles([Resource::inline(NodeId::new(0))]),
                DeclId::new(2),
            );
        });
        assert!(handle.join().is_ok());

        assert_eq!(shared.read().styles(DeclId::new(2)).len(), 1);
    }
}
