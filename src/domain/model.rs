use serde::Serialize;
use serde_json::{Map, Value};

/// One CSV data row, keyed by header column name in header order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    /// Pairs header names with cell values positionally.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let data = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();
        Self { data }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).and_then(Value::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// All records of one input file, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub records: Vec<Record>,
}

impl Document {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub json: String,
    pub record_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_header_order() {
        let record = Record::from_pairs([("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        let columns: Vec<&str> = record.columns().collect();
        assert_eq!(columns, vec!["zeta", "alpha", "mid"]);
        assert_eq!(record.get("alpha"), Some("2"));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_document_serializes_as_array() {
        let document = Document::new(vec![Record::from_pairs([("a", "1")])]);
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"[{"a":"1"}]"#);
    }
}
