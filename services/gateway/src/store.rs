use dashmap::DashMap;
use types::ids::AssessmentId;
use types::record::AssessmentRecord;

/// Storage for completed assessments
pub trait AssessmentStore: Send + Sync {
    fn insert(&self, record: AssessmentRecord);

    fn get(&self, id: &AssessmentId) -> Option<AssessmentRecord>;

    /// All records carrying `reference`, most recent first
    ///
    /// Ties on `created_at` fall back to the time-ordered id.
    fn find_by_reference(&self, reference: &str) -> Vec<AssessmentRecord>;
}

/// Process-local store, lost on restart
#[derive(Default)]
pub struct InMemoryStore {
    records: DashMap<AssessmentId, AssessmentRecord>,
    // reference -> ids in insertion order
    by_reference: DashMap<String, Vec<AssessmentId>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentStore for InMemoryStore {
    fn insert(&self, record: AssessmentRecord) {
        let id = record.id;
        let reference = record.reference.clone();
        // Re-inserting an id replaces the record without re-indexing it
        if self.records.insert(id, record).is_none() {
            self.by_reference.entry(reference).or_default().push(id);
        }
    }

    fn get(&self, id: &AssessmentId) -> Option<AssessmentRecord> {
        self.records.get(id).map(|r| r.value().clone())
    }

    fn find_by_reference(&self, reference: &str) -> Vec<AssessmentRecord> {
        // Copy the id list so no shard lock is held across the second map
        let ids = match self.by_reference.get(reference) {
            Some(ids) => ids.value().clone(),
            None => return Vec::new(),
        };

        let mut records: Vec<AssessmentRecord> =
            ids.iter().filter_map(|id| self.get(id)).collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use risk_engine::{AssessmentEngine, AssessmentRequest};
    use std::sync::Arc;
    use std::thread;
    use types::answers::AnswerSet;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    fn record(reference: &str, created_at: DateTime<Utc>) -> AssessmentRecord {
        AssessmentEngine::new()
            .assess(
                AssessmentRequest {
                    reference: reference.to_string(),
                    comment: String::new(),
                    answers: AnswerSet::ALL_FALSE.into(),
                },
                created_at,
                None,
            )
            .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryStore::new();
        let r = record("SEC-1", t0());
        let id = r.id;
        store.insert(r.clone());
        assert_eq!(store.get(&id), Some(r));
        assert_eq!(store.get(&AssessmentId::new()), None);
    }

    #[test]
    fn test_find_by_reference_newest_first() {
        let store = InMemoryStore::new();
        let old = record("SEC-1", t0());
        let newest = record("SEC-1", t0() + Duration::hours(2));
        let middle = record("SEC-1", t0() + Duration::hours(1));
        let other = record("SEC-2", t0() + Duration::hours(3));

        for r in [old.clone(), newest.clone(), middle.clone(), other] {
            store.insert(r);
        }

        let found: Vec<_> = store.find_by_reference("SEC-1").into_iter().map(|r| r.id).collect();
        assert_eq!(found, vec![newest.id, middle.id, old.id]);
    }

    #[test]
    fn test_same_timestamp_breaks_tie_by_id() {
        let store = InMemoryStore::new();
        let first = record("SEC-1", t0());
        let second = record("SEC-1", t0());
        store.insert(first.clone());
        store.insert(second.clone());

        let found: Vec<_> = store.find_by_reference("SEC-1").into_iter().map(|r| r.id).collect();
        assert_eq!(found, vec![second.id, first.id]);
    }

    #[test]
    fn test_unknown_reference_is_empty() {
        let store = InMemoryStore::new();
        store.insert(record("SEC-1", t0()));
        assert!(store.find_by_reference("sec-1").is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for j in 0..25 {
                        store.insert(record("SHARED", t0() + Duration::seconds(i * 100 + j)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.records.len(), 100);
        let found = store.find_by_reference("SHARED");
        assert_eq!(found.len(), 100);
        assert!(found.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }
}
