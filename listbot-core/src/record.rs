//! Records parsed from the `;`-delimited list and the immutable store holding them.

use rand::Rng;

use crate::error::Result;

/// Header of the title-like column.
pub const TITLE_FIELD: &str = "Материал";
/// Header of the date-like column.
pub const DATE_FIELD: &str = "Дата включения";
/// Title used when a record has no usable title value.
pub const TITLE_PLACEHOLDER: &str = "Record";

/// One CSV row keyed by header names, in column order. Values are raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Value of the named field, if the row had that column.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value at a column position.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Title field, else the first value, else [`TITLE_PLACEHOLDER`]. Empty values count as missing.
    pub fn title(&self) -> &str {
        self.named_or_positional(TITLE_FIELD, 0)
            .unwrap_or(TITLE_PLACEHOLDER)
    }

    /// Date field, else the second value, else an empty string. Empty values count as missing.
    pub fn date(&self) -> &str {
        self.named_or_positional(DATE_FIELD, 1).unwrap_or("")
    }

    fn named_or_positional(&self, name: &str, index: usize) -> Option<&str> {
        self.get(name)
            .filter(|v| !v.is_empty())
            .or_else(|| self.value_at(index).filter(|v| !v.is_empty()))
    }
}

/// Ordered, read-only list of records loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parses `;`-delimited text whose first row is the header.
    ///
    /// Cells are zipped to header cells by position: short rows lack the trailing
    /// fields, cells beyond the header are dropped. Blank lines are skipped.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let fields: Vec<(String, String)> = headers
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            if !fields.is_empty() {
                records.push(Record::new(fields));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Picks a record uniformly at random from the thread-local generator. `None` when empty.
    pub fn pick_random(&self) -> Option<(usize, &Record)> {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Picks a record uniformly at random from `rng`. `None` when empty.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, &Record)> {
        if self.records.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.records.len());
        Some((index, &self.records[index]))
    }
}
