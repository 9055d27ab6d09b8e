//! Partitioning of a job into contiguous batches

use super::types::BatchJob;

/// Number of batches needed for `total_records` rows
pub fn batch_count(total_records: u64, batch_size: u64) -> u64 {
    if batch_size == 0 {
        return 0;
    }
    total_records.div_ceil(batch_size)
}

/// Iterator over the batches of a job, in index order
///
/// Batch `n` covers row indexes `[n * batch_size, min((n + 1) * batch_size, total))` and the
/// identifiers obtained by offsetting those indexes with `starting_id`, so batches never
/// share an identifier.
///
/// `starting_id + total_records - 1` must fit in an `i64`; the loader checks this
/// before planning.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    total_records: u64,
    batch_size: u64,
    starting_id: i64,
    next_index: u64,
}

impl BatchPlan {
    pub fn new(total_records: u64, batch_size: u64, starting_id: i64) -> Self {
        Self {
            total_records,
            batch_size,
            starting_id,
            // A zero batch size yields no batches instead of looping forever
            next_index: if batch_size == 0 { total_records } else { 0 },
        }
    }

    pub fn batch_count(&self) -> u64 {
        batch_count(self.total_records, self.batch_size)
    }
}

impl Iterator for BatchPlan {
    type Item = BatchJob;

    fn next(&mut self) -> Option<BatchJob> {
        if self.next_index >= self.total_records {
            return None;
        }

        let start_index = self.next_index;
        let size = self.batch_size.min(self.total_records - start_index);
        self.next_index += size;

        Some(BatchJob {
            sequence: start_index / self.batch_size + 1,
            start_index,
            size,
            starting_id: self.starting_id + start_index as i64,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_records.saturating_sub(self.next_index);
        let batches = batch_count(remaining, self.batch_size) as usize;
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for BatchPlan {}
