// Ordered, non-empty candle series parsed from raw candlestick records
use crate::error::{EngineError, Result};
use chrono::DateTime;
use shared::models::{Candle, CandlestickRecord};
use std::ops::Index;

// Strict decimal parsing for the string fields of a candlestick record
pub mod decimal {
    use crate::error::{EngineError, Result};
    use std::str::FromStr;

    /// Parses `value` as a finite `f64`. Surrounding whitespace is allowed,
    /// trailing garbage, `NaN` and infinities are not.
    pub fn parse_field(index: usize, field: &'static str, value: &str) -> Result<f64> {
        match f64::from_str(value.trim()) {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(EngineError::InvalidField {
                index,
                field,
                value: value.to_string(),
            }),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_field_valid() {
            assert_eq!(parse_field(0, "open", "0.02500100").unwrap(), 0.025001);
            assert_eq!(parse_field(0, "open", " 12 ").unwrap(), 12.0);
            assert_eq!(parse_field(0, "open", "1e-3").unwrap(), 0.001);
        }

        #[test]
        fn test_parse_field_rejects_garbage() {
            assert!(parse_field(0, "open", "abc").is_err());
            assert!(parse_field(0, "open", "").is_err());
            assert!(parse_field(0, "open", "1.5abc").is_err());
        }

        #[test]
        fn test_parse_field_rejects_non_finite() {
            assert!(parse_field(0, "close", "NaN").is_err());
            assert!(parse_field(0, "close", "inf").is_err());
            assert!(parse_field(0, "close", "-infinity").is_err());
        }

        #[test]
        fn test_parse_field_error_names_field_and_index() {
            let err = parse_field(7, "volume", "n/a").unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("'volume'"));
            assert!(msg.contains("record 7"));
            assert!(msg.contains("'n/a'"));
        }
    }
}

/// Chronologically ordered candles. Index 0 is the earliest observation and
/// the series always holds at least one candle.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    candles: Vec<Candle>,
}

impl Series {
    pub fn new(candles: Vec<Candle>) -> Result<Self> {
        if candles.is_empty() {
            return Err(EngineError::EmptySeries);
        }
        Ok(Series { candles })
    }

    /// Parses raw records in order. Any unparsable field aborts the whole series.
    pub fn from_records(records: &[CandlestickRecord]) -> Result<Self> {
        let candles = records
            .iter()
            .enumerate()
            .map(|(index, record)| parse_record(index, record))
            .collect::<Result<Vec<_>>>()?;
        Series::new(candles)
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn first(&self) -> &Candle {
        &self.candles[0]
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }
}

impl Index<usize> for Series {
    type Output = Candle;

    fn index(&self, index: usize) -> &Candle {
        &self.candles[index]
    }
}

fn parse_record(index: usize, record: &CandlestickRecord) -> Result<Candle> {
    let time = DateTime::from_timestamp_millis(record.close_time).ok_or(
        EngineError::InvalidTimestamp {
            index,
            millis: record.close_time,
        },
    )?;
    Ok(Candle {
        time,
        open: decimal::parse_field(index, "open", &record.open)?,
        close: decimal::parse_field(index, "close", &record.close)?,
        high: decimal::parse_field(index, "high", &record.high)?,
        low: decimal::parse_field(index, "low", &record.low)?,
        volume: decimal::parse_field(index, "volume", &record.volume)?,
    })
}
