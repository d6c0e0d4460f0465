//! In-memory mirror of the server's record set and its derived views.

use storage::dto::weight::WeightResponse;

/// Mirror of the last fetched record set.
///
/// Built from one full fetch; each successful write is applied locally
/// instead of refetching.
pub struct WeightLog {
    records: Vec<WeightResponse>,
}

impl WeightLog {
    pub fn new(records: Vec<WeightResponse>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record returned by a successful create.
    pub fn apply_created(&mut self, record: WeightResponse) {
        self.records.push(record);
    }

    /// Replace the record with the same id, if present.
    pub fn apply_updated(&mut self, record: WeightResponse) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) {
            *slot = record;
        }
    }

    /// Drop the record with the given id, if present.
    pub fn apply_deleted(&mut self, id: i64) {
        self.records.retain(|r| r.id != id);
    }

    /// All records, oldest first.
    pub fn chronological(&self) -> Vec<&WeightResponse> {
        let mut sorted: Vec<&WeightResponse> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.date);
        sorted
    }

    /// All records, most recent first.
    pub fn recent_first(&self) -> Vec<&WeightResponse> {
        let mut sorted: Vec<&WeightResponse> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// The lowest weight recorded on each distinct date, oldest first.
    pub fn daily_minima(&self) -> Vec<&WeightResponse> {
        let mut minima: Vec<&WeightResponse> = Vec::new();
        // Sorted input keeps equal dates adjacent.
        for record in self.chronological() {
            match minima.last_mut() {
                Some(last) if last.date == record.date => {
                    if record.weight < last.weight {
                        *last = record;
                    }
                }
                _ => minima.push(record),
            }
        }
        minima
    }

    /// Upper bound for the chart's y axis.
    pub fn y_axis_upper_bound(&self) -> f64 {
        if self.records.is_empty() {
            return 100.0;
        }

        let max = self
            .records
            .iter()
            .map(|r| r.weight)
            .fold(f64::NEG_INFINITY, f64::max);
        max + 10.0
    }
}
