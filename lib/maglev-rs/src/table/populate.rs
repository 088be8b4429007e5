use super::{
    Permutation,
    error::{TableError, TableResult},
};

/// Fills a `size`-slot lookup table from the backends' permutations.
///
/// Backends take turns in slice order; on its turn a backend walks its row
/// from its cursor to the first unclaimed slot and claims it. Each cursor
/// only moves forward and stops at the end of its row, so the total scan
/// work is bounded by `N * M`. A backend running off the end of its row
/// before the table is full yields [`TableError::Inconsistent`].
///
/// No permutations yields an empty table.
pub fn populate(permutations: &[Permutation], size: usize) -> TableResult<Vec<usize>> {
    if permutations.is_empty() {
        return Ok(Vec::new());
    }

    let mut next = vec![0; permutations.len()];
    let mut entry: Vec<Option<usize>> = vec![None; size];
    let mut filled = 0;

    'outer: while filled < size {
        for (i, (permutation, next)) in permutations.iter().zip(next.iter_mut()).enumerate() {
            loop {
                let Some(&c) = permutation.row().get(*next) else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        "populate: backend {i} exhausted its permutation at {filled}/{size} slots"
                    );

                    return Err(TableError::Inconsistent { filled, size });
                };
                *next += 1;

                if let Some(slot) = entry.get_mut(c)
                    && slot.is_none()
                {
                    *slot = Some(i);
                    break;
                }
            }

            filled += 1;
            if filled == size {
                break 'outer;
            }
        }
    }

    entry
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(TableError::Inconsistent { filled, size })
}
