use crate::ast::FragmentDefinitionNode;
use indexmap::IndexMap;
use std::sync::Arc;

/// What [`FragmentRegistry::register`] decided about a fragment.
#[derive(Clone, Debug)]
pub enum FragmentRegistration {
    /// First fragment seen under this name. The given instance was recorded.
    Registered,

    /// A structurally identical fragment was registered earlier. Callers
    /// should use this instance in place of the one they passed in.
    Known(Arc<FragmentDefinitionNode>),

    /// The name is already taken by a different body. The new instance was
    /// recorded alongside the existing ones; `first_body` is the body first
    /// registered under this name.
    Collision {
        first_body: String,
    },
}

/// Tracks every fragment an engine has resolved, keyed by name and then by
/// normalized source body.
///
/// The first body recorded under a name is never replaced.
#[derive(Debug, Default)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, IndexMap<String, Arc<FragmentDefinitionNode>>>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        fragment: &Arc<FragmentDefinitionNode>,
    ) -> FragmentRegistration {
        let name = fragment.name();
        let body = fragment.source_body();

        let Some(known_bodies) = self.fragments.get_mut(name) else {
            let mut known_bodies = IndexMap::new();
            known_bodies.insert(body.to_string(), Arc::clone(fragment));
            self.fragments.insert(name.to_string(), known_bodies);
            return FragmentRegistration::Registered;
        };

        if let Some(existing) = known_bodies.get(body) {
            return FragmentRegistration::Known(Arc::clone(existing));
        }

        let first_body = known_bodies
            .keys()
            .next()
            .cloned()
            .unwrap_or_default();
        known_bodies.insert(body.to_string(), Arc::clone(fragment));
        FragmentRegistration::Collision { first_body }
    }

    /// The registered instance for `(name, body)`, if any.
    pub fn get(&self, name: &str, body: &str) -> Option<&Arc<FragmentDefinitionNode>> {
        self.fragments.get(name)?.get(body)
    }

    /// Every body recorded under `name`, in registration order.
    pub fn known_bodies(&self, name: &str) -> impl Iterator<Item = &str> {
        self.fragments
            .get(name)
            .into_iter()
            .flat_map(|known_bodies| known_bodies.keys().map(String::as_str))
    }

    /// Registered fragment names, in the order they were first seen.
    pub fn fragment_names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    pub fn reset_all(&mut self) {
        self.fragments.clear();
    }

    /// Number of distinct fragment names.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
