use crate::error::StoreError;
use crate::metric::simd::{self, SimdFunc};

/// The flat vector arena: one contiguous `Vec<f32>` holding every row
/// back-to-back, so a full similarity scan walks memory linearly.
///
/// Row `i` occupies `[i * dimension, (i + 1) * dimension)`. A parallel list
/// of cached L2 magnitudes is maintained under every mutation and consumed
/// by the scoring pass.
pub struct VectorArena {
    dimension: usize,
    rows: Vec<f32>,
    magnitudes: Vec<f32>,
    kernel: SimdFunc,
}

impl VectorArena {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            rows: Vec::new(),
            magnitudes: Vec::new(),
            kernel: simd::vector_kernel(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Every incoming vector passes through here before any mutation.
    pub fn check_dimension(&self, vector: &[f32]) -> Result<(), StoreError> {
        if vector.len() != self.dimension {
            return Err(StoreError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    fn l2_norm(&self, vector: &[f32]) -> f32 {
        // SAFETY: the pointer is valid for `vector.len()` reads.
        unsafe { (self.kernel)(vector.as_ptr(), vector.as_ptr(), vector.len()) }.sqrt()
    }

    /// Appends `vector` as the last row. Amortized growth, no capacity
    /// ceiling beyond available memory.
    pub fn append(&mut self, vector: &[f32]) {
        debug_assert_eq!(vector.len(), self.dimension);
        self.rows.extend_from_slice(vector);
        self.magnitudes.push(self.l2_norm(vector));
    }

    /// Deletes the row at `position`; every later row shifts up one.
    /// Linear in the number of elements past `position`.
    pub fn remove_at(&mut self, position: usize) {
        debug_assert!(position < self.len());
        let start = position * self.dimension;
        self.rows.drain(start..start + self.dimension);
        self.magnitudes.remove(position);
    }

    /// Overwrites the row at `position` in place. No shift.
    pub fn replace_at(&mut self, position: usize, vector: &[f32]) {
        debug_assert_eq!(vector.len(), self.dimension);
        debug_assert!(position < self.len());
        let start = position * self.dimension;
        self.rows[start..start + self.dimension].copy_from_slice(vector);
        self.magnitudes[position] = self.l2_norm(vector);
    }

    pub fn row(&self, position: usize) -> &[f32] {
        let start = position * self.dimension;
        &self.rows[start..start + self.dimension]
    }

    /// Cosine score of every row against `query`, in row order.
    ///
    /// Zero-norm rows or a zero-norm query are not guarded: the IEEE-754
    /// quotient (`NaN` or infinity) lands in the output.
    pub fn similarity_scores(&self, query: &[f32]) -> Vec<f32> {
        debug_assert_eq!(query.len(), self.dimension);
        let query_norm = self.l2_norm(query);
        let mut scores = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            // SAFETY: row i spans dimension floats starting at i * dimension,
            // within the arena allocation.
            let dot = unsafe {
                (self.kernel)(
                    query.as_ptr(),
                    self.rows.as_ptr().add(i * self.dimension),
                    self.dimension,
                )
            };
            scores.push(dot / (self.magnitudes[i] * query_norm));
        }
        scores
    }
}
