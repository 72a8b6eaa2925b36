//! Double-entry ledger for a single small business: the transaction log, a
//! keyword chart of accounts, and the period-end reports derived from them.

pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod closing;
pub mod db;
pub mod error;
pub mod export;
pub mod fmt;
pub mod importer;
pub mod models;
pub mod reports;
pub mod settings;

#[cfg(test)]
mod report_props;
