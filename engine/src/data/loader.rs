use crate::data::series::Series;
use crate::error::{EngineError, Result};
use csv::ReaderBuilder;
use shared::models::CandlestickRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encoding of a candlestick data file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEncoding {
    /// JSON array of records, as dumped from the exchange.
    Json,
    /// CSV with header `closeTime,open,close,high,low,volume`.
    Csv,
}

impl DataEncoding {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => DataEncoding::Csv,
            _ => DataEncoding::Json,
        }
    }
}

pub struct CandlestickLoader;

impl CandlestickLoader {
    /// Reads and parses the whole file into a `Series`. Nothing is returned
    /// until every record has parsed, so callers never see a partial series.
    pub fn load_series(path: &Path) -> Result<Series> {
        let records = Self::load_records(path)?;
        tracing::debug!(path = %path.display(), records = records.len(), "Read candlestick records");
        let series = Series::from_records(&records)?;
        tracing::info!(
            path = %path.display(),
            candles = series.len(),
            first = %series.first().time,
            "Loaded candlestick series"
        );
        Ok(series)
    }

    pub fn load_records(path: &Path) -> Result<Vec<CandlestickRecord>> {
        let file = File::open(path).map_err(|e| EngineError::io(path.display().to_string(), e))?;
        let reader = BufReader::new(file);
        match DataEncoding::from_path(path) {
            DataEncoding::Json => Ok(serde_json::from_reader(reader)?),
            DataEncoding::Csv => {
                let mut rdr = ReaderBuilder::new()
                    .has_headers(true)
                    .trim(csv::Trim::All)
                    .from_reader(reader);
                let mut records: Vec<CandlestickRecord> = Vec::new();
                for result in rdr.deserialize() {
                    records.push(result?);
                }
                Ok(records)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_encoding_from_path() {
        assert_eq!(DataEncoding::from_path(Path::new("a/candlesticks-XMRBTC.json")), DataEncoding::Json);
        assert_eq!(DataEncoding::from_path(Path::new("a/minutes.CSV")), DataEncoding::Csv);
        assert_eq!(DataEncoding::from_path(Path::new("no_extension")), DataEncoding::Json);
    }

    #[test]
    fn test_load_series_from_json() {
        let json = r#"[
            {"closeTime": 1525132799999, "open": "0.025", "close": "0.026", "high": "0.027", "low": "0.024", "volume": "100.5"},
            {"closeTime": 1525132859999, "open": "0.026", "close": "0.025", "high": "0.026", "low": "0.025", "volume": "80"}
        ]"#;
        let file = create_test_file(".json", json);
        let series = CandlestickLoader::load_series(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].close, 0.026);
        assert_eq!(series[1].volume, 80.0);
    }

    #[test]
    fn test_load_series_from_csv() {
        let csv_content = "\
closeTime,open,close,high,low,volume
1525132799999,0.025,0.026,0.027,0.024,100.5
1525132859999, 0.026 ,0.025,0.026,0.025,80";
        let file = create_test_file(".csv", csv_content);
        let series = CandlestickLoader::load_series(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].open, 0.026);
        assert_eq!(series[0].high, 0.027);
    }

    #[test]
    fn test_load_series_empty_array() {
        let file = create_test_file(".json", "[]");
        let result = CandlestickLoader::load_series(file.path());
        assert!(matches!(result, Err(EngineError::EmptySeries)));
    }

    #[test]
    fn test_load_series_malformed_json() {
        let file = create_test_file(".json", r#"[{"closeTime": 1, "open": "1""#);
        let result = CandlestickLoader::load_series(file.path());
        assert!(matches!(result, Err(EngineError::JsonError { .. })));
    }

    #[test]
    fn test_load_series_wrong_structure() {
        let file = create_test_file(".json", r#"{"closeTime": 1}"#);
        let result = CandlestickLoader::load_series(file.path());
        assert!(matches!(result, Err(EngineError::JsonError { .. })));
    }

    #[test]
    fn test_load_series_non_numeric_field() {
        let json = r#"[{"closeTime": 1, "open": "1", "close": "x", "high": "1", "low": "1", "volume": "1"}]"#;
        let file = create_test_file(".json", json);
        let result = CandlestickLoader::load_series(file.path());
        assert!(matches!(result, Err(EngineError::InvalidField { field: "close", .. })));
    }

    #[test]
    fn test_load_series_csv_missing_column() {
        let csv_content = "\
closeTime,open,close,high,low
1525132799999,0.025,0.026,0.027,0.024";
        let file = create_test_file(".csv", csv_content);
        let result = CandlestickLoader::load_series(file.path());
        assert!(matches!(result, Err(EngineError::CsvError { .. })));
    }

    #[test]
    fn test_load_series_missing_file() {
        let result = CandlestickLoader::load_series(Path::new("/nonexistent/candlesticks-XMRBTC.json"));
        match result {
            Err(EngineError::IoError { path, .. }) => assert!(path.contains("candlesticks-XMRBTC.json")),
            other => panic!("Expected IoError, got {:?}", other),
        }
    }
}
