//! One-shot dataset loading: fetch the delimited text, parse it into raw
//! rows, and hand the result to a consumer that may have gone away.
//!
//! The consumer holds a [`LoadToken`] and cancels it when it is no longer
//! interested; a load that completes afterwards is discarded silently rather
//! than applied. The token is an explicit object instead of a captured
//! liveness flag so the check sits next to the apply site.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::core::platform;
use crate::core::record::RawRecord;

/// Default dataset location: an asset URL on web, a relative path on native.
#[cfg(target_arch = "wasm32")]
pub const DATASET_PATH: &str = "/assets/loan_eligibility.csv";
#[cfg(not(target_arch = "wasm32"))]
pub const DATASET_PATH: &str = "assets/loan_eligibility.csv";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The text could not be retrieved (network or filesystem).
    Fetch(String),
    /// The text was retrieved but is not a readable CSV table.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(detail) => write!(f, "fetching dataset: {detail}"),
            LoadError::Parse(detail) => write!(f, "parsing dataset: {detail}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Cancellation token for the one-shot load.
#[derive(Debug, Clone, Default)]
pub struct LoadToken(Rc<Cell<bool>>);

impl LoadToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Parses header-addressed CSV text into raw rows. The whole table either
/// parses or the load fails; no partial dataset is surfaced.
pub fn parse_rows(csv_text: &str) -> Result<Vec<RawRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: RawRecord = row.map_err(|err| LoadError::Parse(err.to_string()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Retrieves and parses the dataset from `source`.
pub async fn load_dataset(source: &str) -> Result<Vec<RawRecord>, LoadError> {
    let text = platform::fetch_dataset_text(source)
        .await
        .map_err(LoadError::Fetch)?;
    parse_rows(&text)
}
