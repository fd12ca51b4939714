//! Remote source location and request settings.

use reqwest::Url;

use crate::domain::{DataFileName, IndexReference};
use crate::http_client::{HttpClient, HttpRequest};
use crate::RateError;

pub const DEFAULT_BASE_URL: &str = "http://www.nbp.pl/kursy/xml/";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const INDEX_FILE_EXTENSION: &str = ".txt";
pub const DATA_FILE_EXTENSION: &str = ".xml";

/// Where index and data files are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Directory URL; file names are appended verbatim.
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SourceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn index_url(&self, reference: IndexReference) -> Result<String, RateError> {
        self.resource_url(&reference.stem(), INDEX_FILE_EXTENSION)
    }

    pub fn data_url(&self, file: &DataFileName) -> Result<String, RateError> {
        self.resource_url(file.as_str(), DATA_FILE_EXTENSION)
    }

    fn resource_url(&self, stem: &str, extension: &str) -> Result<String, RateError> {
        let raw = format!("{}{stem}{extension}", self.base_url);
        match Url::parse(&raw) {
            Ok(url) => Ok(String::from(url)),
            Err(error) => {
                let detail = format!("malformed url: {error}");
                Err(RateError::remote_access(raw, detail))
            }
        }
    }

    /// Fetches one resource, collapsing any failure into [`RateError::RemoteAccess`].
    pub(crate) async fn fetch(
        &self,
        client: &dyn HttpClient,
        url: &str,
    ) -> Result<Vec<u8>, RateError> {
        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = match client.execute(request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(url, error = %error, "remote resource unreachable");
                return Err(RateError::remote_access(url, error.message()));
            }
        };

        if !response.is_success() {
            tracing::warn!(
                url,
                status = response.status,
                "remote resource returned error status"
            );
            let detail = format!("status {}", response.status);
            return Err(RateError::remote_access(url, detail));
        }

        tracing::debug!(url, bytes = response.body.len(), "fetched remote resource");
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_index_and_data_urls() {
        let config = SourceConfig::default();
        let yearly = config.index_url(IndexReference::Year(2013));
        assert_eq!(
            yearly.expect("valid url"),
            "http://www.nbp.pl/kursy/xml/dir2013.txt"
        );
        let current = config.index_url(IndexReference::Current);
        assert_eq!(
            current.expect("valid url"),
            "http://www.nbp.pl/kursy/xml/dir.txt"
        );

        let file = DataFileName::parse("c002z200103").expect("valid name");
        assert_eq!(
            config.data_url(&file).expect("valid url"),
            "http://www.nbp.pl/kursy/xml/c002z200103.xml"
        );
    }

    #[test]
    fn malformed_base_url_is_a_remote_access_error() {
        let config = SourceConfig::default().with_base_url("not a url/");
        let result = config.index_url(IndexReference::Current);
        assert!(matches!(result, Err(RateError::RemoteAccess { .. })));
    }
}
