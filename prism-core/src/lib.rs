//! PRISM Core: an exact nearest-neighbor vector store.
//!
//! Fixed-dimension `f32` vectors, each tagged with a unique string
//! identifier, held in one flat arena and scanned with runtime-dispatched
//! SIMD kernels. Insert, delete, update and top-k cosine query, all
//! synchronous and single-threaded.

pub mod error;
pub mod metric;
pub mod store;

// Re-exports for the common call sites
pub use error::StoreError;
pub use metric::Metric;
pub use store::{Match, Store};
