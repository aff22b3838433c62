//! Append-only query history.

use std::sync::{Mutex, MutexGuard};

use guardian_core::{GuardianError, QueryRecord, Result};

/// Thread-safe log of answered questions in insertion order.
///
/// Shared between the assistant and the HTTP layer behind an `Arc`. Records
/// are never removed or reordered.
#[derive(Debug, Default)]
pub struct HistoryLog {
    records: Mutex<Vec<QueryRecord>>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<QueryRecord>>> {
        self.records
            .lock()
            .map_err(|e| GuardianError::History(format!("history lock poisoned: {}", e)))
    }

    pub fn append(&self, record: QueryRecord) -> Result<()> {
        self.lock()?.push(record);
        Ok(())
    }

    /// Number of records. A poisoned lock still reports the records that were
    /// written, since a push either completes or leaves the vector untouched.
    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(records) => records.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Result<Vec<QueryRecord>> {
        let records = self.lock()?;
        let start = records.len().saturating_sub(n);
        Ok(records[start..].to_vec())
    }

    /// Copy of every record.
    pub fn snapshot(&self) -> Result<Vec<QueryRecord>> {
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use chrono::Utc;
    use guardian_core::{Confidence, GeneratedResponse, Intent};
    use uuid::Uuid;

    use super::*;

    fn record(question: &str) -> QueryRecord {
        QueryRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            question: question.to_string(),
            intent: Intent::GeneralClimate,
            response: GeneratedResponse {
                answer: "answer".to_string(),
                sources: vec!["IPCC Reports".to_string()],
                confidence: Confidence::new(95),
            },
        }
    }

    fn questions(records: &[QueryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.question.as_str()).collect()
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let log = HistoryLog::new();
        for q in ["one", "two", "three"] {
            log.append(record(q)).unwrap();
        }
        assert_eq!(log.len(), 3);
        assert_eq!(questions(&log.snapshot().unwrap()), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_recent_returns_tail_oldest_first() {
        let log = HistoryLog::new();
        for i in 0..15 {
            log.append(record(&format!("q{}", i))).unwrap();
        }
        let recent = log.recent(10).unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].question, "q5");
        assert_eq!(recent[9].question, "q14");

        assert_eq!(log.recent(100).unwrap().len(), 15);
        assert!(log.recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let log = Arc::new(HistoryLog::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for i in 0..25 {
                        log.append(record(&format!("t{}-{}", t, i))).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let all = log.snapshot().unwrap();
        assert_eq!(all.len(), 200);

        // Each thread's own records stay in the order it wrote them.
        for t in 0..8 {
            let prefix = format!("t{}-", t);
            let seq: Vec<usize> = all
                .iter()
                .filter_map(|r| r.question.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(seq, (0..25).collect::<Vec<_>>());
        }
    }
}
