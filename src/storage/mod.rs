//! Storage layer for IceLink.
//!
//! The public resolver only ever reads; the traits here are the read
//! contracts the three resolvers depend on. Concrete backends also carry
//! the write surface used by the (out-of-scope) authenticated edit path
//! and by tests.

mod dataset;
mod memory;
mod traits;

pub use dataset::Dataset;
pub use memory::{
    InMemoryContactStore, InMemoryProfileStore, InMemoryStores, InMemorySubscriptionStore,
};
pub use traits::{ContactStore, ProfileStore, StorageError, SubscriptionStore};
