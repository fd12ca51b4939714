//! End-to-end pipeline: resolve indices, extract rates, compute statistics.

use std::sync::Arc;

use crate::domain::RateSummary;
use crate::extract::DataExtractor;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::index::IndexResolver;
use crate::source::SourceConfig;
use crate::validation::{validate_arguments, RateQuery};
use crate::RateError;

/// Runs the two-stage retrieval for a validated query.
///
/// Requests are issued strictly one after another; the first failure aborts
/// the run and no partial summary is produced.
#[derive(Clone)]
pub struct RateCalculator {
    resolver: IndexResolver,
    extractor: DataExtractor,
}

impl Default for RateCalculator {
    fn default() -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::default()),
            SourceConfig::default(),
        )
    }
}

impl RateCalculator {
    pub fn new(http_client: Arc<dyn HttpClient>, config: SourceConfig) -> Self {
        Self {
            resolver: IndexResolver::new(Arc::clone(&http_client), config.clone()),
            extractor: DataExtractor::new(http_client, config),
        }
    }

    pub fn with_current_year(mut self, current_year: i32) -> Self {
        self.resolver = self.resolver.with_current_year(current_year);
        self
    }

    /// Validates raw command-line arguments, then runs [`calculate`](Self::calculate).
    ///
    /// Nothing is requested unless every argument passes validation.
    pub async fn calculate_arguments(
        &self,
        currency: &str,
        start: &str,
        end: &str,
    ) -> Result<RateSummary, RateError> {
        let query = validate_arguments(Some(currency), Some(start), Some(end))?;
        tracing::debug!(currency = %query.currency, range = %query.range, "arguments validated");
        self.calculate(&query).await
    }

    pub async fn calculate(&self, query: &RateQuery) -> Result<RateSummary, RateError> {
        let files = self.resolver.resolve(&query.range).await?;
        let series = self.extractor.collect(&files, &query.currency).await?;

        let summary = RateSummary::from_series(&series, files.len());
        tracing::info!(
            currency = %query.currency,
            files = summary.files_scanned,
            entries = summary.entries_found,
            "rate summary computed"
        );
        Ok(summary)
    }
}
