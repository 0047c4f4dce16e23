//! Array-backed binary max-heap with a fixed capacity chosen at
//! construction. The heap owns its storage and provides no internal
//! synchronization; wrap it in a lock for shared use.

pub mod heap;

pub use heap::{HeapError, MaxHeap};
