//! Profile adapters for linked-profile storage

mod in_memory;
mod remote_store;

pub use in_memory::InMemoryProfileStore;
pub use remote_store::RemoteProfileStore;
