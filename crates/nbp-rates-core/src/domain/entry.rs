use std::fmt::{Display, Formatter};

use crate::stats::{mean, standard_deviation};

/// Ask and bid values read for one currency from one data file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AskBidEntry {
    pub ask: f64,
    pub bid: f64,
}

impl AskBidEntry {
    pub const fn new(ask: f64, bid: f64) -> Self {
        Self { ask, bid }
    }
}

/// Ask and bid values collected across data files, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    pub asks: Vec<f64>,
    pub bids: Vec<f64>,
}

impl RateSeries {
    pub fn push(&mut self, entry: AskBidEntry) {
        self.asks.push(entry.ask);
        self.bids.push(entry.bid);
    }

    pub fn len(&self) -> usize {
        self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty()
    }
}

/// Final result of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    pub ask_mean: f64,
    pub bid_std_dev: f64,
    pub files_scanned: usize,
    pub entries_found: usize,
}

impl RateSummary {
    pub fn from_series(series: &RateSeries, files_scanned: usize) -> Self {
        Self {
            ask_mean: mean(&series.asks),
            bid_std_dev: standard_deviation(&series.bids),
            files_scanned,
            entries_found: series.len(),
        }
    }
}

/// Two lines: ask mean, then bid standard deviation, four decimals each.
impl Display for RateSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:.4}", self.ask_mean)?;
        write!(f, "{:.4}", self.bid_std_dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_keeps_asks_and_bids_parallel() {
        let mut series = RateSeries::default();
        series.push(AskBidEntry::new(3.95, 4.03));
        series.push(AskBidEntry::new(3.97, 4.05));

        assert_eq!(series.asks, vec![3.95, 3.97]);
        assert_eq!(series.bids, vec![4.03, 4.05]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn summary_renders_four_decimals() {
        let mut series = RateSeries::default();
        series.push(AskBidEntry::new(4.0, 2.0));
        series.push(AskBidEntry::new(5.0, 4.0));

        let summary = RateSummary::from_series(&series, 3);
        assert_eq!(summary.to_string(), "4.5000\n1.0000");
        assert_eq!(summary.files_scanned, 3);
        assert_eq!(summary.entries_found, 2);
    }

    #[test]
    fn empty_series_summarises_to_zero() {
        let summary = RateSummary::from_series(&RateSeries::default(), 0);
        assert_eq!(summary.to_string(), "0.0000\n0.0000");
    }
}
