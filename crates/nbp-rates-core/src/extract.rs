//! Rate extraction from daily data files.
//!
//! Data files are ISO-8859-2 pseudo-XML with one value per line. A currency
//! block looks like:
//!
//! ```text
//! <kod_waluty>USD</kod_waluty>
//! <kurs_kupna>3,9521</kurs_kupna>
//! <kurs_sprzedazy>4,0319</kurs_sprzedazy>
//! ```
//!
//! Lines are matched textually; no XML parsing or entity decoding happens.

use std::sync::Arc;

use encoding_rs::ISO_8859_2;

use crate::domain::{AskBidEntry, CurrencyCode, DataFileName, RateSeries};
use crate::http_client::HttpClient;
use crate::source::SourceConfig;
use crate::RateError;

pub const CURRENCY_TAG: &str = "kod_waluty";
pub const ASK_TAG: &str = "kurs_kupna";
pub const BID_TAG: &str = "kurs_sprzedazy";

/// Text between `<tag>` and the following `</tag>` on `line`.
pub fn tag_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let opening = format!("<{tag}>");
    let closing = format!("</{tag}>");

    let value_start = line.find(&opening)? + opening.len();
    let value_len = line[value_start..].find(&closing)?;
    Some(&line[value_start..value_start + value_len])
}

/// Tag value parsed as a number written with a decimal comma.
pub fn decimal_value(line: &str, tag: &str) -> Result<f64, String> {
    let Some(raw) = tag_value(line, tag) else {
        return Err(format!("expected <{tag}> in line '{line}'"));
    };
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("value '{raw}' of <{tag}> is not a number"))
}

/// First ask/bid pair for `currency` in decoded file content, if any.
pub fn extract_entry(
    file: &str,
    content: &str,
    currency: &CurrencyCode,
) -> Result<Option<AskBidEntry>, RateError> {
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        let Some(code) = tag_value(line, CURRENCY_TAG) else {
            continue;
        };
        if !currency.matches(code) {
            continue;
        }

        let ask = next_decimal(file, lines.next(), ASK_TAG)?;
        let bid = next_decimal(file, lines.next(), BID_TAG)?;
        return Ok(Some(AskBidEntry::new(ask, bid)));
    }
    Ok(None)
}

fn next_decimal(file: &str, line: Option<&str>, tag: &str) -> Result<f64, RateError> {
    let Some(line) = line else {
        let reason = format!("file ends before <{tag}>");
        return Err(RateError::malformed_data(file, reason));
    };
    decimal_value(line, tag).map_err(|reason| RateError::malformed_data(file, reason))
}

/// Decodes a data file body using the fixed legacy encoding.
pub fn decode_data_file(body: &[u8]) -> String {
    let (content, _, had_errors) = ISO_8859_2.decode(body);
    if had_errors {
        tracing::debug!("data file contained bytes outside ISO-8859-2");
    }
    content.into_owned()
}

/// Fetches data files one by one and collects the requested currency's rates.
#[derive(Clone)]
pub struct DataExtractor {
    http_client: Arc<dyn HttpClient>,
    config: SourceConfig,
}

impl DataExtractor {
    pub fn new(http_client: Arc<dyn HttpClient>, config: SourceConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub async fn extract(
        &self,
        file: &DataFileName,
        currency: &CurrencyCode,
    ) -> Result<Option<AskBidEntry>, RateError> {
        let url = self.config.data_url(file)?;
        let body = self.config.fetch(self.http_client.as_ref(), &url).await?;
        let entry = extract_entry(file.as_str(), &decode_data_file(&body), currency)?;
        if entry.is_none() {
            tracing::debug!(file = %file, currency = %currency, "currency not listed in file");
        }
        Ok(entry)
    }

    pub async fn collect(
        &self,
        files: &[DataFileName],
        currency: &CurrencyCode,
    ) -> Result<RateSeries, RateError> {
        let mut series = RateSeries::default();
        for file in files {
            if let Some(entry) = self.extract(file, currency).await? {
                series.push(entry);
            }
        }
        Ok(series)
    }
}
