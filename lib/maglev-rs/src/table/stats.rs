use super::Maglev;

impl<B: PartialEq> Maglev<B> {
    /// Slots owned by each backend, in backend order.
    #[must_use]
    pub fn distribution(&self) -> Vec<usize> {
        let mut counts = vec![0; self.backends.len()];
        for &idx in &self.lookup_table {
            if let Some(count) = counts.get_mut(idx) {
                *count += 1;
            }
        }
        counts
    }

    /// Slots whose owning backend differs between `self` and `other`.
    ///
    /// Backends are compared by identity, not index, so removals that shift
    /// indices are not counted as moves. A slot owned in only one of the two
    /// tables counts as changed.
    pub fn changed_slots<'a>(&'a self, other: &'a Maglev<B>) -> impl Iterator<Item = usize> + 'a {
        let len = self.lookup_table.len().max(other.lookup_table.len());
        (0..len).filter(move |&slot| self.owner(slot) != other.owner(slot))
    }

    fn owner(&self, slot: usize) -> Option<&B> {
        self.lookup_table
            .get(slot)
            .and_then(|&idx| self.backends.get(idx))
    }
}
