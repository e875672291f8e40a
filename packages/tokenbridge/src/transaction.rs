//! All-or-nothing execution over a `cosmwasm_std::Storage`.
//!
//! `StorageTransaction` buffers every write made through it on top of a read-only base. Reads
//! observe the buffered writes. `transactional` flushes the buffer into the base only when the
//! wrapped operation succeeds; on failure the buffer is dropped and the base is untouched.

use std::collections::BTreeMap;

use cosmwasm_std::{Order, Record, Storage};

pub struct StorageTransaction<'a> {
    base: &'a dyn Storage,
    // `None` marks a removal.
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> StorageTransaction<'a> {
    pub fn new(base: &'a dyn Storage) -> Self {
        StorageTransaction {
            base,
            writes: BTreeMap::new(),
        }
    }

    /// Consumes the transaction, returning the buffered writes.
    pub fn prepare(self) -> WriteLog {
        WriteLog(self.writes)
    }
}

/// Writes collected by a `StorageTransaction`, ready to be applied.
#[derive(Debug, Default)]
pub struct WriteLog(BTreeMap<Vec<u8>, Option<Vec<u8>>>);

impl WriteLog {
    pub fn commit(self, storage: &mut dyn Storage) {
        for (k, v) in self.0 {
            match v {
                Some(v) => storage.set(&k, &v),
                None => storage.remove(&k),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Storage for StorageTransaction<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(v) => v.clone(),
            None => self.base.get(key),
        }
    }

    fn range<'b>(
        &'b self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        let in_range = |k: &[u8]| start.map_or(true, |s| k >= s) && end.map_or(true, |e| k < e);

        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.base.range(start, end, Order::Ascending).collect();
        for (k, v) in self.writes.iter().filter(|(k, _)| in_range(k.as_slice())) {
            match v {
                Some(v) => {
                    let _ = merged.insert(k.clone(), v.clone());
                }
                None => {
                    let _ = merged.remove(k);
                }
            }
        }

        let records: Vec<Record> = match order {
            Order::Ascending => merged.into_iter().collect(),
            Order::Descending => merged.into_iter().rev().collect(),
        };
        Box::new(records.into_iter())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        let _ = self.writes.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        let _ = self.writes.insert(key.to_vec(), None);
    }
}

/// Runs `action` against a transaction over `storage`, committing its writes only if it
/// returns `Ok`.
pub fn transactional<T, F>(storage: &mut dyn Storage, action: F) -> anyhow::Result<T>
where
    F: FnOnce(&mut dyn Storage) -> anyhow::Result<T>,
{
    let mut tx = StorageTransaction::new(storage);
    let res = action(&mut tx)?;
    tx.prepare().commit(storage);
    Ok(res)
}
