//! Index resolution: which data files cover a date range.
//!
//! The server publishes one index per past year (`dir2019.txt`, ...) plus one
//! for the current year (`dir.txt`). Each index lists data file names, one per
//! line; the date embedded in the name decides whether it falls in range.

use std::sync::Arc;

use time::OffsetDateTime;

use crate::domain::{DataFileName, DateRange, IndexReference};
use crate::http_client::HttpClient;
use crate::source::SourceConfig;
use crate::RateError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Index files to read for `range`, oldest first.
///
/// One per year from the start year up to (excluding) the end year, then the
/// current index if the range ends this year, or the end year's index otherwise.
pub fn index_references(range: &DateRange, current_year: i32) -> Vec<IndexReference> {
    let end_year = range.end().year();
    let mut references: Vec<IndexReference> = (range.start().year()..end_year)
        .map(IndexReference::Year)
        .collect();

    if end_year == current_year {
        references.push(IndexReference::Current);
    } else {
        references.push(IndexReference::Year(end_year));
    }
    references
}

/// Data file names listed in an index whose embedded date lies in `range`.
pub fn parse_index(content: &str, range: &DateRange) -> Vec<DataFileName> {
    content
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(content)
        .lines()
        .filter_map(DataFileName::parse)
        .filter(|file| range.contains(file.date()))
        .collect()
}

/// Fetches index files and collects the data file names they list.
#[derive(Clone)]
pub struct IndexResolver {
    http_client: Arc<dyn HttpClient>,
    config: SourceConfig,
    current_year: i32,
}

impl IndexResolver {
    /// The current year comes from the UTC clock, not the local time zone, so
    /// during the first hours of January 1st in Poland it is still last year.
    /// Use [`with_current_year`](Self::with_current_year) to pin it.
    pub fn new(http_client: Arc<dyn HttpClient>, config: SourceConfig) -> Self {
        Self {
            http_client,
            config,
            current_year: OffsetDateTime::now_utc().year(),
        }
    }

    /// Overrides the year treated as current when picking `dir.txt`.
    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.current_year = current_year;
        self
    }

    pub const fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Names of all data files in `range`, in index order. Not deduplicated.
    pub async fn resolve(&self, range: &DateRange) -> Result<Vec<DataFileName>, RateError> {
        let mut files = Vec::new();
        for reference in index_references(range, self.current_year) {
            let url = self.config.index_url(reference)?;
            let body = self.config.fetch(self.http_client.as_ref(), &url).await?;
            let content = String::from_utf8_lossy(&body);

            let listed = parse_index(&content, range);
            tracing::debug!(index = %reference, files = listed.len(), "parsed index");
            files.extend(listed);
        }

        tracing::info!(range = %range, files = files.len(), "resolved data files");
        Ok(files)
    }
}
