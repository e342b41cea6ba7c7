//! Collection storage adapters.

mod file_store;
mod memory;

pub use file_store::FileCollectionStore;
pub use memory::MemoryCollectionStore;
