use crate::core::{ConversionRecord, Statistics};

/// Session history: insertion-ordered, append-only, in memory only.
/// Created empty at startup and discarded at process exit; `clear` is
/// the only way to shrink it.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<ConversionRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    /// Snapshot of the full history in insertion order. Mutating the
    /// returned vector does not touch the store.
    pub fn all(&self) -> Vec<ConversionRecord> {
        self.records.clone()
    }

    /// Most recent records first, at most `limit` of them. Records
    /// sharing a timestamp come back last-inserted-first, so the
    /// snapshot is reversed before the stable sort.
    pub fn recent(&self, limit: usize) -> Vec<ConversionRecord> {
        let mut snapshot = self.records.clone();
        snapshot.reverse();
        snapshot.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        snapshot.truncate(limit);
        snapshot
    }

    /// Records with `currency_code` on either leg, in insertion order.
    pub fn by_currency(&self, currency_code: &str) -> Vec<ConversionRecord> {
        self.records
            .iter()
            .filter(|r| r.from_currency == currency_code || r.to_currency == currency_code)
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Aggregate statistics, or `None` while the history is empty.
    ///
    /// Most-used currency: every record votes for both legs, `from`
    /// before `to`, tallied left-to-right in insertion order into an
    /// ordered list. The winner only changes on a strictly greater
    /// count, so it is the first code to reach the final maximum and
    /// the result never depends on map iteration order.
    pub fn statistics(&self) -> Option<Statistics> {
        if self.records.is_empty() {
            return None;
        }

        let mut tally: Vec<(&str, usize)> = Vec::new();
        let mut best = 0;
        let mut best_count = 0;
        for record in &self.records {
            for code in [record.from_currency.as_str(), record.to_currency.as_str()] {
                let idx = match tally.iter().position(|(c, _)| *c == code) {
                    Some(idx) => {
                        tally[idx].1 += 1;
                        idx
                    }
                    None => {
                        tally.push((code, 1));
                        tally.len() - 1
                    }
                };
                if tally[idx].1 > best_count {
                    best_count = tally[idx].1;
                    best = idx;
                }
            }
        }

        Some(Statistics {
            total: self.records.len(),
            most_used_currency: tally[best].0.to_string(),
            total_amount_converted: self.records.iter().map(|r| r.amount).sum(),
        })
    }

    /// Rendered history block: the most recent `limit` entries,
    /// numbered, with a trailer when older entries are cut off.
    pub fn formatted_history(&self, limit: usize) -> String {
        if self.records.is_empty() {
            return "No conversions recorded yet.".to_string();
        }

        let mut out = String::from("=== CONVERSION HISTORY ===\n");
        for (i, record) in self.recent(limit).iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, record));
        }

        if self.records.len() > limit {
            out.push_str(&format!(
                "\n... and {} earlier conversions.\n",
                self.records.len() - limit
            ));
        }

        out
    }

    pub fn formatted_statistics(&self) -> String {
        match self.statistics() {
            None => "No conversions to build statistics from.".to_string(),
            Some(stats) => format!(
                "=== STATISTICS ===\nTotal conversions: {}\nMost used currency: {}\nTotal amount converted: {:.2}\n",
                stats.total, stats.most_used_currency, stats.total_amount_converted
            ),
        }
    }
}
