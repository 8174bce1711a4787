use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One scored row. Position is the row index at scoring time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub score: f32,
    pub position: usize,
}

impl Eq for Candidate {}

// Wrapper so the BinaryHeap (which pops the largest) evicts the worst
// candidate: lowest score first, ties evict the highest position.
struct WorstFirst(Candidate);

impl PartialEq for WorstFirst {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WorstFirst {}

impl PartialOrd for WorstFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WorstFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .score
            .partial_cmp(&self.0.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.0.position.cmp(&other.0.position))
    }
}

/// Selects the `k` highest-scoring rows, descending by score. Ties are
/// broken by lowest position first, so repeated queries over an unchanged
/// store return identical results. `k` past the row count returns every
/// row; `k == 0` returns nothing.
pub(crate) fn select(scores: &[f32], k: usize) -> Vec<Candidate> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }

    let capacity = k.saturating_add(1).min(scores.len() + 1);
    let mut heap: BinaryHeap<WorstFirst> = BinaryHeap::with_capacity(capacity);
    for (position, &score) in scores.iter().enumerate() {
        heap.push(WorstFirst(Candidate { score, position }));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut winners: Vec<Candidate> = heap.into_iter().map(|w| w.0).collect();
    winners.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });
    winners
}
