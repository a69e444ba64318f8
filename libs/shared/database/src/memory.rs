use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

/// In-memory table of domain records.
///
/// Readers get a shared snapshot of the whole collection. Writers copy the
/// current rows, mutate the copy and swap it in only when the mutation
/// succeeds, so a failed write leaves the table exactly as it was. Writes
/// are serialized by the lock.
pub struct MemoryTable<T> {
    name: &'static str,
    rows: RwLock<Arc<Vec<T>>>,
}

impl<T: Clone> MemoryTable<T> {
    pub fn new(name: &'static str) -> Self {
        Self::with_rows(name, Vec::new())
    }

    pub fn with_rows(name: &'static str, rows: Vec<T>) -> Self {
        debug!("Creating in-memory table '{}' with {} rows", name, rows.len());
        Self {
            name,
            rows: RwLock::new(Arc::new(rows)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current contents, in insertion order.
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        // A panicking writer never swapped its copy in, so the stored rows stay valid.
        let guard = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.snapshot().iter().find(|row| predicate(row)).cloned()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.snapshot()
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub fn insert(&self, row: T) {
        self.replace(|rows| {
            rows.push(row);
            Ok::<(), std::convert::Infallible>(())
        })
        .unwrap_or_else(|never| match never {});
    }

    /// Run `mutation` against a copy of the rows and publish the copy on success.
    pub fn replace<F, R, E>(&self, mutation: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
    {
        let mut guard = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.as_ref().clone();

        let outcome = mutation(&mut next)?;

        *guard = Arc::new(next);
        debug!("Table '{}' replaced ({} rows)", self.name, guard.len());
        Ok(outcome)
    }
}
