//! Metrics emitted by the token client.
//!
//! Recorded through the `metrics` facade; installing an exporter is up to the
//! application.

use metrics::{counter, describe_counter};
use std::sync::Once;

const READS: &str = "erc20_reads_total";
const READ_FAILURES: &str = "erc20_read_failures_total";
const CACHE_HITS: &str = "erc20_metadata_cache_hits_total";
const SUBMISSIONS: &str = "erc20_transactions_submitted_total";
const SUBMISSION_FAILURES: &str = "erc20_transaction_failures_total";

static DESCRIBED: Once = Once::new();

/// Counters for token client activity, labelled by contract method.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics handle. Descriptions are registered with the
    /// installed recorder the first time this runs in the process.
    pub fn new() -> Self {
        DESCRIBED.call_once(Self::register_descriptions);
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(READS, "Contract reads sent to the chain, by method");
        describe_counter!(READ_FAILURES, "Contract reads that failed, by method");
        describe_counter!(
            CACHE_HITS,
            "Metadata reads served from the client cache, by field"
        );
        describe_counter!(
            SUBMISSIONS,
            "Transactions accepted by the node, by method"
        );
        describe_counter!(
            SUBMISSION_FAILURES,
            "Transactions that failed to sign or broadcast, by method"
        );
    }

    pub fn record_read(&self, method: &'static str) {
        counter!(READS, "method" => method).increment(1);
    }

    pub fn record_read_failure(&self, method: &'static str) {
        counter!(READ_FAILURES, "method" => method).increment(1);
    }

    pub fn record_cache_hit(&self, field: &'static str) {
        counter!(CACHE_HITS, "field" => field).increment(1);
    }

    pub fn record_submission(&self, method: &'static str) {
        counter!(SUBMISSIONS, "method" => method).increment(1);
    }

    pub fn record_submission_failure(&self, method: &'static str) {
        counter!(SUBMISSION_FAILURES, "method" => method).increment(1);
    }
}
