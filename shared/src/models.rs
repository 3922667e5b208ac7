use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candlestick as delivered by the data source: millisecond close time
/// and prices/volume as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickRecord {
    pub close_time: i64,
    pub open: String,
    pub close: String,
    pub high: String,
    pub low: String,
    pub volume: String,
}

/// A parsed candle. Immutable once built from a `CandlestickRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_exchange_json() {
        // Exchange dumps carry extra fields (openTime, trades, ...) which are ignored.
        let json = r#"{
            "openTime": 1525132740000,
            "closeTime": 1525132799999,
            "open": "0.02500100",
            "close": "0.02501000",
            "high": "0.02502000",
            "low": "0.02499000",
            "volume": "152.31000000",
            "trades": 41
        }"#;
        let record: CandlestickRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.close_time, 1525132799999);
        assert_eq!(record.open, "0.02500100");
        assert_eq!(record.volume, "152.31000000");
    }

    #[test]
    fn test_record_missing_field_is_rejected() {
        let json = r#"{ "closeTime": 1, "open": "1", "close": "1", "high": "1", "low": "1" }"#;
        let result: Result<CandlestickRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
