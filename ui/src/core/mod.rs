//! Pure data pipeline: normalization, filtering, aggregation, binning,
//! stacking, scale mapping, insight metrics, and dataset loading.

pub mod aggregate;
pub mod binning;
pub mod filter;
pub mod format;
pub mod insights;
pub mod loader;
pub mod platform;
pub mod record;
pub mod scale;
pub mod stack;
