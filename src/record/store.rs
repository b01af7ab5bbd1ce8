use crate::error::{AdixError, Result};
use crate::record::schema::{FIELD_DELIMITER, SchemaConfig, strip_quotes};

/// Position of a record in the store. This is the value stored in index
/// postings and the sole join key between index and content.
pub type RecordPos = u32;

/// One logical record: a delimited row of the dataset, possibly reassembled
/// from several physical lines by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Parse a physical line against the schema. Rows with fewer fields than
    /// the schema requires are rejected rather than indexed out of range.
    pub fn parse(line: &str, line_no: usize, schema: &SchemaConfig) -> Result<Self> {
        let fields: Vec<String> = line.split(FIELD_DELIMITER).map(str::to_string).collect();
        if fields.len() < schema.required_fields() {
            return Err(AdixError::MalformedRecord {
                line: line_no,
                reason: format!(
                    "expected at least {} fields, got {}",
                    schema.required_fields(),
                    fields.len()
                ),
            });
        }
        Ok(Self { fields })
    }

    /// Rebuild a record from already-validated fields (used by the merge step)
    pub(crate) fn from_fields(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn merge_key<'a>(&'a self, schema: &SchemaConfig) -> &'a str {
        &self.fields[schema.merge_key_field]
    }

    /// Continuation flag, if the row carries one
    pub fn continuation_flag<'a>(&'a self, schema: &SchemaConfig) -> Option<&'a str> {
        self.fields.get(schema.continuation_field).map(String::as_str)
    }

    /// Whether this row is flagged as a fragment of a split record.
    /// An absent or malformed flag conservatively means "not continued".
    pub fn is_continued(&self, schema: &SchemaConfig) -> bool {
        self.continuation_flag(schema) == Some(schema.continued_code.as_str())
    }

    /// Quote-stripped text of the indexable fields
    pub fn indexable_text<'a>(
        &'a self,
        schema: &'a SchemaConfig,
    ) -> impl Iterator<Item = String> + 'a {
        schema
            .indexable_fields
            .iter()
            .map(|&i| strip_quotes(&self.fields[i]))
    }

    /// The record re-serialized as one delimited line
    pub fn text(&self) -> String {
        self.fields.join(",")
    }
}

/// Ordered, immutable-after-build sequence of logical records.
///
/// Positions are 0-based and stable for the lifetime of one index; the index
/// must be built from exactly the store it is queried against.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn get(&self, pos: RecordPos) -> Option<&Record> {
        self.records.get(pos as usize)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records paired with their positions, for index construction
    pub fn enumerate(&self) -> impl Iterator<Item = (RecordPos, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as RecordPos, r))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(postal: &str, pref: &str, city: &str, town: &str, flag: &str) -> String {
        format!(
            "13108,\"104  \",\"{postal}\",\"トウキョウト\",\"チュウオウク\",\"ギンザ\",\"{pref}\",\"{city}\",\"{town}\",0,0,0,{flag},0,0"
        )
    }

    #[test]
    fn test_parse_and_accessors() {
        let schema = SchemaConfig::default();
        let line = row("1040061", "東京都", "中央区", "銀座", "0");
        let rec = Record::parse(&line, 1, &schema).unwrap();

        assert_eq!(rec.merge_key(&schema), "\"1040061\"");
        assert_eq!(rec.continuation_flag(&schema), Some("0"));
        assert!(!rec.is_continued(&schema));
        let indexable: Vec<String> = rec.indexable_text(&schema).collect();
        assert_eq!(indexable, vec!["東京都", "中央区", "銀座"]);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let schema = SchemaConfig::default();
        let err = Record::parse("13108,\"104\",\"1040061\"", 4, &schema).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_absent_flag_means_not_continued() {
        let schema = SchemaConfig::default();
        // Only 9 fields, flag column missing entirely
        let line = "13108,\"104\",\"1040061\",\"ア\",\"イ\",\"ウ\",\"東京都\",\"中央区\",\"銀座\"";
        let rec = Record::parse(line, 1, &schema).unwrap();
        assert_eq!(rec.continuation_flag(&schema), None);
        assert!(!rec.is_continued(&schema));
    }

    #[test]
    fn test_text_roundtrips_line() {
        let schema = SchemaConfig::default();
        let line = row("1040061", "東京都", "中央区", "銀座", "0");
        let rec = Record::parse(&line, 1, &schema).unwrap();
        assert_eq!(rec.text(), line);
    }

    #[test]
    fn test_store_positions() {
        let schema = SchemaConfig::default();
        let records = vec![
            Record::parse(&row("1040061", "東京都", "中央区", "銀座", "0"), 1, &schema).unwrap(),
            Record::parse(&row("5450052", "大阪府", "大阪市", "阿倍野", "0"), 2, &schema).unwrap(),
        ];
        let store = RecordStore::new(records);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().merge_key(&schema), "\"5450052\"");
        assert!(store.get(2).is_none());
        let positions: Vec<RecordPos> = store.enumerate().map(|(p, _)| p).collect();
        assert_eq!(positions, vec![0, 1]);
    }
}
