pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod repository;
pub mod stats;

pub use memory::MemoryRepository;
pub use queries::SqliteRepository;
pub use repository::{EntriesByDate, EntryRepository};
