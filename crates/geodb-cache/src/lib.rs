//! geodb-cache
//!
//! A fixed-capacity least-recently-used map. Entries live in an arena of slots
//! threaded by an intrusive doubly linked list (front = least recently used),
//! with a `HashMap` from key to slot index, so lookups, promotion, insertion
//! and eviction are all O(1) on average.
//!
//! The cache does no locking. Share it across threads behind a `Mutex`.

mod lru;

pub use lru::{Iter, LruCache};
