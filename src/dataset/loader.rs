//! CSV loading for the resort table.
//!
//! The resort file is ISO-8859-1 encoded. Every byte is mapped to the code
//! point of the same value before the CSV reader sees it.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::error::{LoadError, LoadResult};
use super::record::ResortRow;
use super::Dataset;

/// Decode ISO-8859-1 bytes.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Load the resort table from a file on disk.
pub fn load_path(path: &Path) -> LoadResult<Dataset> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read resort file");

    let dataset = Dataset::from_rows(parse_rows(&decode_latin1(&bytes))?)?;
    info!(
        path = %path.display(),
        resorts = dataset.len(),
        countries = dataset.country_count(),
        "loaded resort table"
    );
    Ok(dataset)
}

/// Load the resort table from any ISO-8859-1 byte source.
pub fn load_reader<R: Read>(mut reader: R) -> LoadResult<Dataset> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Dataset::from_rows(parse_rows(&decode_latin1(&bytes))?)
}

/// Deserialize every row of already-decoded CSV text.
pub fn parse_rows(text: &str) -> LoadResult<Vec<ResortRow>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let row: ResortRow = record.deserialize(Some(&headers))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if let Some((column, value)) = row
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(LoadError::NonFinite {
                line,
                column,
                value,
            });
        }
        rows.push(row);
    }

    Ok(rows)
}
