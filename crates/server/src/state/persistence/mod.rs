use anyhow::Result;
pub use in_memory::InMemoryPersistence;
use serde::{Deserialize, Serialize};

mod in_memory;

/// Persistence trait for storing and retrieving tasks.
/// Implementations are assumed to be "fast", i.e. blocking inside the
/// store actor is not a concern here.
pub trait StatePersistence {
    fn put<T>(&mut self, key: &str, value: T) -> Result<()>
    where
        T: Serialize;
    fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>;
    fn delete<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de>;
    fn list<T>(&self, prefix: &str) -> Result<Vec<T>>
    where
        T: for<'de> Deserialize<'de>;
}
