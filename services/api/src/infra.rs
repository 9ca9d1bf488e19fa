use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use job_board::board::{ApiFacade, BoardOptions, DomainStore, PaginationMode, WritePolicy};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SeededFacade = ApiFacade<DomainStore>;

/// Facade over a store preloaded with the demo catalogue.
pub(crate) fn seeded_facade(options: BoardOptions) -> Arc<SeededFacade> {
    Arc::new(ApiFacade::new(Arc::new(DomainStore::seeded()), options))
}

pub(crate) fn parse_write_policy(raw: &str) -> Result<WritePolicy, String> {
    WritePolicy::parse(raw).ok_or_else(|| format!("expected 'persist' or 'echo', got '{raw}'"))
}

pub(crate) fn parse_pagination(raw: &str) -> Result<PaginationMode, String> {
    PaginationMode::parse(raw)
        .ok_or_else(|| format!("expected 'unsliced' or 'sliced', got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_map_to_board_switches() {
        assert_eq!(parse_write_policy("echo"), Ok(WritePolicy::EchoOnly));
        assert_eq!(parse_pagination("paged"), Ok(PaginationMode::Sliced));
        assert!(parse_write_policy("maybe")
            .expect_err("unknown policy")
            .contains("maybe"));
    }
}
