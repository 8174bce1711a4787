mod arena;
mod id_map;
mod topk;

use crate::error::StoreError;
use crate::metric::Metric;
use arena::VectorArena;
use id_map::IdMap;
use log::{debug, info};

/// One query hit: the owning identifier and its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: String,
    pub score: f32,
}

/// The exact nearest-neighbor vector store.
///
/// Every public operation resolves identifiers through the identifier
/// index, then acts on the flat row arena. Operations are
/// atomic-or-untouched:
/// each one either fully applies or errors before mutating. The single
/// documented exception is [`Store::delete_batch`], which is not
/// transactional across items.
///
/// The store is single-threaded and owns its data outright; inputs are
/// copied in, and callers needing shared access must serialize externally.
pub struct Store {
    metric: Metric,
    ids: IdMap,
    arena: VectorArena,
}

impl Store {
    /// Creates an empty store for vectors of exactly `dimension` elements.
    ///
    /// # Panics
    /// Panics if `dimension` is zero.
    pub fn new(dimension: usize, metric: Metric) -> Self {
        assert!(dimension > 0, "store dimension must be positive");
        info!(
            "Initializing vector store (Dim: {}, Metric: {:?})",
            dimension, metric
        );
        Self {
            metric,
            ids: IdMap::new(),
            arena: VectorArena::new(dimension),
        }
    }

    pub fn dimension(&self) -> usize {
        self.arena.dimension()
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.ids.len(), self.arena.len());
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Borrowed view of the vector owned by `id`, if present.
    pub fn get(&self, id: &str) -> Option<&[f32]> {
        self.ids.resolve(id).ok().map(|position| self.arena.row(position))
    }

    /// Appends `vector` under `id` at the next position.
    pub fn insert(&mut self, id: &str, vector: &[f32]) -> Result<(), StoreError> {
        id_map::validate(id)?;
        self.arena.check_dimension(vector)?;
        self.ids.insert(id)?;
        self.arena.append(vector);
        Ok(())
    }

    /// Removes `id` and its row, compacting every later position down one.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        id_map::validate(id)?;
        let position = self.ids.remove(id)?;
        self.arena.remove_at(position);
        Ok(())
    }

    /// Removes a batch of identifiers in the given order.
    ///
    /// Every identifier is validated non-empty before any deletion happens.
    /// The batch itself is not transactional: the first missing identifier
    /// stops processing with [`StoreError::NotFound`], and deletions already
    /// applied stay applied.
    pub fn delete_batch<I, S>(&mut self, ids: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<S> = ids.into_iter().collect();
        for id in &ids {
            id_map::validate(id.as_ref())?;
        }
        debug!("Deleting batch of {} identifiers", ids.len());
        for id in &ids {
            let position = self.ids.remove(id.as_ref())?;
            self.arena.remove_at(position);
        }
        Ok(())
    }

    /// Overwrites the row owned by `id` in place. The identifier and its
    /// position are unchanged.
    pub fn update(&mut self, id: &str, vector: &[f32]) -> Result<(), StoreError> {
        id_map::validate(id)?;
        self.arena.check_dimension(vector)?;
        let position = self.ids.resolve(id)?;
        self.arena.replace_at(position, vector);
        Ok(())
    }

    /// The `k` identifiers most similar to `vector`, descending by score,
    /// ties broken by lowest position first.
    ///
    /// An empty store yields an empty result, not an error. `k` past the
    /// row count returns every row; `k == 0` returns nothing. Zero-norm
    /// rows or a zero-norm query produce `NaN` scores (see
    /// [`crate::metric::cosine_similarity`]).
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<Match>, StoreError> {
        self.arena.check_dimension(vector)?;
        if self.arena.is_empty() {
            return Ok(Vec::new());
        }

        let scores = match self.metric {
            Metric::Cosine => self.arena.similarity_scores(vector),
        };

        let winners = topk::select(&scores, k);
        Ok(winners
            .into_iter()
            .map(|c| Match {
                id: self.ids.id_at(c.position).to_string(),
                score: c.score,
            })
            .collect())
    }

    /// Stored identifiers in position order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.ids.iter()
    }
}
