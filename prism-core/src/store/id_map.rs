use crate::error::StoreError;
use std::collections::HashMap;

/// Identifiers must be non-empty. Checked before any mutation, including
/// before the first item of a batch is touched.
pub(crate) fn validate(id: &str) -> Result<(), StoreError> {
    if id.is_empty() {
        return Err(StoreError::InvalidIdentifier);
    }
    Ok(())
}

/// The identifier index: resolves identifiers to row positions and enforces
/// uniqueness.
///
/// Two views are kept consistent under every mutation: a forward map
/// (identifier to position) and the ordered reverse list (position to
/// identifier). `ids[i]` always names row `i` of the arena.
pub struct IdMap {
    positions: HashMap<String, usize>,
    ids: Vec<String>,
}

impl IdMap {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Appends `id` at the next position and returns it.
    pub fn insert(&mut self, id: &str) -> Result<usize, StoreError> {
        if self.positions.contains_key(id) {
            return Err(StoreError::DuplicateIdentifier(id.to_string()));
        }
        let position = self.ids.len();
        self.positions.insert(id.to_string(), position);
        self.ids.push(id.to_string());
        Ok(position)
    }

    pub fn resolve(&self, id: &str) -> Result<usize, StoreError> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Removes `id` and returns the vacated position. Every identifier past
    /// the vacated position shifts down one; the forward map is rewritten
    /// for each shifted identifier in the same pass.
    pub fn remove(&mut self, id: &str) -> Result<usize, StoreError> {
        let position = self
            .positions
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.ids.remove(position);
        for i in position..self.ids.len() {
            if let Some(slot) = self.positions.get_mut(self.ids[i].as_str()) {
                *slot = i;
            }
        }
        Ok(position)
    }

    /// The identifier owning row `position`.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds.
    pub fn id_at(&self, position: usize) -> &str {
        &self.ids[position]
    }

    /// Identifiers in position order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl Default for IdMap {
    fn default() -> Self {
        Self::new()
    }
}
