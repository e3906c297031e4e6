use log::warn;

use super::{body::Body, types::BodyKind};

/// Ordered store of every simulated body.
///
/// Iteration follows insertion order so pairwise passes are deterministic.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Adds a body.
    ///
    /// A body sharing a name with an existing one replaces it in place. A second asteroid
    /// replaces the current asteroid and moves to the end of the order.
    pub fn add(&mut self, body: Body) {
        if let Some(slot) = self.bodies.iter_mut().find(|b| b.name == body.name) {
            warn!("replacing existing body {:?}", body.name);
            *slot = body;
            return;
        }

        if body.kind == BodyKind::Asteroid {
            if let Some(index) = self.index_of_kind(BodyKind::Asteroid) {
                let previous = self.bodies.remove(index);
                warn!("replacing asteroid {:?} with {:?}", previous.name, body.name);
            }
        }

        self.bodies.push(body);
    }

    /// Removes a body by name. Missing names are a logged no-op.
    pub fn remove(&mut self, name: &str) -> Option<Body> {
        match self.bodies.iter().position(|b| b.name == name) {
            Some(index) => Some(self.bodies.remove(index)),
            None => {
                warn!("remove: no body named {name:?}");
                None
            }
        }
    }

    /// Removes the first body of `kind`, if any.
    pub fn remove_kind(&mut self, kind: BodyKind) -> Option<Body> {
        let index = self.index_of_kind(kind)?;
        Some(self.bodies.remove(index))
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn all(&self) -> &[Body] {
        &self.bodies
    }

    pub fn all_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.name == name)
    }

    pub fn first_of_kind(&self, kind: BodyKind) -> Option<&Body> {
        self.bodies.iter().find(|b| b.kind == kind)
    }

    pub fn contains_kind(&self, kind: BodyKind) -> bool {
        self.index_of_kind(kind).is_some()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn index_of_kind(&self, kind: BodyKind) -> Option<usize> {
        self.bodies.iter().position(|b| b.kind == kind)
    }
}
