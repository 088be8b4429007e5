mod error;
mod permutation;
mod populate;
mod stats;

use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

use fnv::FnvHashMap;

pub use error::TableError;
pub use permutation::Permutation;
pub use populate::populate;

pub(crate) use error::TableResult;

use crate::{
    config::{HashKeys, MaglevConfig, TableSize},
    error::MaglevResult,
    flow::FlowKey,
    hash::{SipBuildHasher, hash},
};

/// Maglev consistent hash table.
///
/// Owns the ordered backend list, one [`Permutation`] per backend and the
/// `M`-slot lookup table. Every membership change regenerates all of them;
/// a failed change leaves the table untouched.
///
/// Not internally synchronized. To serve lookups during a change, clone,
/// mutate the clone and swap it in behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Maglev<B = String> {
    backends: Vec<B>,
    index: FnvHashMap<B, usize>,
    permutations: Vec<Permutation>,
    lookup_table: Vec<usize>,
    size: TableSize,
    keys: HashKeys,
    hasher: SipBuildHasher,
}

impl<B> Maglev<B>
where
    B: AsRef<[u8]> + Eq + Hash + Clone,
{
    /// Builds a table of `size` slots with the default hash keys.
    ///
    /// `size` must be prime. Backend identifiers must be unique.
    pub fn new(backends: impl IntoIterator<Item = B>, size: usize) -> MaglevResult<Self> {
        Self::with_config(backends, &MaglevConfig::new(size))
    }

    pub fn with_config(
        backends: impl IntoIterator<Item = B>,
        config: &MaglevConfig,
    ) -> MaglevResult<Self> {
        let (size, keys) = config.validate()?;

        let mut maglev = Self {
            backends: Vec::new(),
            index: FnvHashMap::default(),
            permutations: Vec::new(),
            lookup_table: Vec::new(),
            size,
            keys,
            hasher: SipBuildHasher::new(keys.lookup, 0),
        };
        maglev.rebuild(backends.into_iter().collect())?;

        Ok(maglev)
    }

    /// Appends `backend` and rebuilds.
    pub fn add(&mut self, backend: B) -> TableResult<()> {
        if self.index.contains_key(&backend) {
            return Err(TableError::already_exists(&backend));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "maglev: adding backend {}",
            String::from_utf8_lossy(backend.as_ref())
        );

        let mut backends = self.backends.clone();
        backends.push(backend);
        self.rebuild(backends)
    }

    /// Removes `backend`, keeping the order of the rest, and rebuilds.
    pub fn remove<Q>(&mut self, backend: &Q) -> TableResult<()>
    where
        B: Borrow<Q>,
        Q: AsRef<[u8]> + Eq + Hash + ?Sized,
    {
        let Some(&pos) = self.index.get(backend) else {
            return Err(TableError::not_found(backend));
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "maglev: removing backend {}",
            String::from_utf8_lossy(backend.as_ref())
        );

        let backends = self
            .backends
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pos)
            .map(|(_, b)| b.clone())
            .collect();
        self.rebuild(backends)
    }

    fn rebuild(&mut self, backends: Vec<B>) -> TableResult<()> {
        let mut index = FnvHashMap::with_capacity_and_hasher(backends.len(), Default::default());
        for (i, backend) in backends.iter().enumerate() {
            if index.insert(backend.clone(), i).is_some() {
                return Err(TableError::already_exists(backend));
            }
        }

        let permutations = backends
            .iter()
            .map(|backend| Permutation::generate(backend.as_ref(), self.size, &self.keys))
            .collect::<Vec<_>>();
        let lookup_table = populate(&permutations, self.size.get())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "maglev: rebuilt {} slots for {} backends",
            self.size,
            backends.len()
        );

        self.backends = backends;
        self.index = index;
        self.permutations = permutations;
        self.lookup_table = lookup_table;

        Ok(())
    }
}

impl<B> Maglev<B> {
    /// Slot `key` hashes to, whether or not any backend owns it.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn slot(&self, key: impl AsRef<[u8]>) -> usize {
        (hash(self.keys.lookup, 0, key.as_ref()) % self.size.get() as u64) as usize
    }

    pub fn get_index(&self, key: impl AsRef<[u8]>) -> TableResult<usize> {
        let key = key.as_ref();
        self.resolve(hash(self.keys.lookup, 0, key))
    }

    /// Backend assigned to the byte key `key`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> TableResult<&B> {
        let idx = self.get_index(key)?;
        self.backend_at(idx)
    }

    pub fn get_flow(&self, flow: &FlowKey) -> TableResult<&B> {
        self.get(flow.to_string())
    }

    /// Backend assigned to a structured key, hashed through its [`Hash`] impl.
    ///
    /// Not interchangeable with [`get`](Self::get): `Hash` impls add their own
    /// framing to the bytes they feed the hasher.
    #[inline]
    pub fn lookup<T: Hash + ?Sized>(&self, key: &T) -> TableResult<&B> {
        let idx = self.resolve(self.hasher.hash_one(key))?;
        self.backend_at(idx)
    }

    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn resolve(&self, hash: u64) -> TableResult<usize> {
        if self.backends.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let slot = (hash % self.size.get() as u64) as usize;
        self.lookup_table
            .get(slot)
            .copied()
            .ok_or(TableError::Inconsistent {
                filled: self.lookup_table.len(),
                size: self.size.get(),
            })
    }

    #[inline]
    fn backend_at(&self, idx: usize) -> TableResult<&B> {
        self.backends.get(idx).ok_or(TableError::Inconsistent {
            filled: self.lookup_table.len(),
            size: self.size.get(),
        })
    }

    /// Backends in insertion order; lookup table entries index into this.
    #[must_use]
    pub fn backends(&self) -> &[B] {
        &self.backends
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    #[must_use]
    pub fn table_size(&self) -> usize {
        self.size.get()
    }

    /// Empty while there are no backends, `M` entries otherwise.
    #[must_use]
    pub fn lookup_table(&self) -> &[usize] {
        &self.lookup_table
    }

    #[must_use]
    pub fn permutations(&self) -> &[Permutation] {
        &self.permutations
    }

    #[must_use]
    pub fn hash_keys(&self) -> HashKeys {
        self.keys
    }
}

impl<B: Eq + Hash> Maglev<B> {
    pub fn contains<Q>(&self, backend: &Q) -> bool
    where
        B: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(backend)
    }
}
