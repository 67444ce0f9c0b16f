//! The raw-record fetcher contract and a bundled-data implementation.

use std::io::Read;

use async_trait::async_trait;

use crate::{RawDriverRecord, RecordResponse, SourceError, SourceResult};

/// Supplies raw driver records.
///
/// Network transport lives outside the core; implementations wrap whatever
/// client the application uses.  Any failure is reported as a
/// [`SourceError`] and the engine treats every variant the same way.
/// Implementations must not wait forever: a timeout is a failure.
#[async_trait(?Send)]
pub trait DriverSource {
    /// Fetch up to `count` records.
    async fn fetch(&self, count: usize) -> SourceResult<Vec<RawDriverRecord>>;
}

/// A source backed by a fixed set of records, e.g. a bundled `data.json`.
///
/// Returns the first `count` records on every fetch.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    records: Vec<RawDriverRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RawDriverRecord>) -> Self {
        Self { records }
    }

    /// Parse a `{"results": [...]}` response document.
    pub fn from_json_str(json: &str) -> SourceResult<Self> {
        let response: RecordResponse = serde_json::from_str(json)?;
        Ok(Self::new(response.results))
    }

    /// Like [`from_json_str`](Self::from_json_str) but accepts any `Read`.
    pub fn from_reader<R: Read>(reader: R) -> SourceResult<Self> {
        let response: RecordResponse = serde_json::from_reader(reader)?;
        Ok(Self::new(response.results))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait(?Send)]
impl DriverSource for StaticSource {
    async fn fetch(&self, count: usize) -> SourceResult<Vec<RawDriverRecord>> {
        if self.records.is_empty() {
            return Err(SourceError::Unavailable("no bundled records".into()));
        }
        Ok(self.records.iter().take(count).cloned().collect())
    }
}
