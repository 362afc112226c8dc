#![forbid(unsafe_code)]

//! `signal-store` holds the saved-formula collection for the host's formula
//! list: an ordered, index-addressed set of [`FormulaRecord`]s plus the JSON
//! round-trip the host persists in its key-value store.
//!
//! The store never validates formulas — records reach it through the
//! engine's commit gate, which is the only place validity is enforced.

use signal_model::FormulaRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no formula at index {index} (store has {len})")]
    NotFound { index: usize, len: usize },
    #[error("invalid formula store json: {0}")]
    InvalidJson(String),
}

/// Ordered collection of saved formulas. Records are addressed by their
/// list position, matching the host's list screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormulaStore {
    records: Vec<FormulaRecord>,
}

impl FormulaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize the persisted form: a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<FormulaRecord> =
            serde_json::from_str(json).map_err(|err| StoreError::InvalidJson(err.to_string()))?;
        Ok(Self { records })
    }

    /// Serialize for the host's key-value store.
    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(&self.records).map_err(|err| StoreError::InvalidJson(err.to_string()))
    }

    /// Append a record to the end of the list.
    pub fn add(&mut self, record: FormulaRecord) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&FormulaRecord> {
        self.records.get(index)
    }

    /// Replace the record at `index`, preserving list order.
    pub fn update(&mut self, index: usize, record: FormulaRecord) -> Result<(), StoreError> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::NotFound { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Remove and return the record at `index`, shifting later records down.
    pub fn remove(&mut self, index: usize) -> Result<FormulaRecord, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::NotFound {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormulaRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signal_model::Token;

    fn record(name: &str, equation: &str) -> FormulaRecord {
        FormulaRecord {
            name: name.to_string(),
            description: String::new(),
            tokens: vec![
                Token::function("RSI(CLOSE, 0, 14)"),
                Token::comparison(">"),
                Token::number("70"),
            ],
            equation: equation.to_string(),
        }
    }

    #[test]
    fn crud_is_index_addressed_and_order_preserving() {
        let mut store = FormulaStore::new();
        store.add(record("a", "1 > 2"));
        store.add(record("b", "3 > 4"));
        store.add(record("c", "5 > 6"));

        store.update(1, record("b2", "3 >= 4")).unwrap();
        assert_eq!(store.get(1).unwrap().name, "b2");

        let removed = store.remove(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().name, "b2");
        assert_eq!(store.get(1).unwrap().name, "c");
    }

    #[test]
    fn out_of_range_indices_are_reported() {
        let mut store = FormulaStore::new();
        assert!(matches!(
            store.remove(0),
            Err(StoreError::NotFound { index: 0, len: 0 })
        ));
        assert!(matches!(
            store.update(3, record("x", "")),
            Err(StoreError::NotFound { index: 3, len: 0 })
        ));
    }

    #[test]
    fn json_round_trip_preserves_records_and_order() {
        let mut store = FormulaStore::new();
        store.add(record("RSI Overbought", "RSI(CLOSE, 0, 14) > 70"));
        store.add(record("Golden Cross", "EMA(CLOSE, 0, 12) > SMA(CLOSE, 0, 26)"));

        let json = store.to_json().unwrap();
        let back = FormulaStore::from_json(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn persisted_token_fields_use_the_host_names() {
        let mut store = FormulaStore::new();
        store.add(record("x", "RSI(CLOSE, 0, 14) > 70"));
        let json = store.to_json().unwrap();
        assert!(json.contains(r#""type":"function""#));
        assert!(json.contains(r#""value":"RSI(CLOSE, 0, 14)""#));
    }

    #[test]
    fn bad_json_is_an_explicit_error() {
        assert!(matches!(
            FormulaStore::from_json("{not json"),
            Err(StoreError::InvalidJson(_))
        ));
    }
}
