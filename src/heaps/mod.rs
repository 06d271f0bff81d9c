//! Heaps: where played cards come to rest.
//!
//! ## Key Types
//!
//! - `Direction`: ascending or descending build rule
//! - `Heap`: one pile, validates and commits plays
//! - `HeapSet`: the fixed four heaps of a game, addressed by `HeapId`

pub mod heap;
pub mod set;

pub use heap::{Direction, Heap};
pub use set::{HeapId, HeapSet};
