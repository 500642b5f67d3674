use std::time::Instant;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use tracing::info;

pub const TIMING_TARGET: &str = "server.timing";

#[derive(Debug)]
pub struct RequestTimer {
    route: String,
    tab_type: Option<String>,
    started_at: DateTime<Utc>,
    started_perf: Instant,
    status: u16,
    detail: Option<String>,
    completed: bool,
}

impl RequestTimer {
    pub fn new(route: &str, tab_type: Option<&str>) -> Self {
        RequestTimer {
            route: route.to_string(),
            tab_type: tab_type.map(|value| value.to_string()),
            started_at: Utc::now(),
            started_perf: Instant::now(),
            status: 200,
            detail: None,
            completed: false,
        }
    }

    pub fn log_received(&self) {
        info!(
            target: TIMING_TARGET,
            "event=request_received route={} tab_type={:?} received_at={}",
            self.route,
            self.tab_type,
            self.started_at.to_rfc3339()
        );
    }

    pub fn mark_status(&mut self, status: u16, detail: Option<String>) {
        self.status = status;
        self.detail = detail;
    }

    pub fn log_completed(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        let completed_at = Utc::now();
        let duration = self.started_perf.elapsed().as_secs_f64();
        info!(
            target: TIMING_TARGET,
            "event=request_completed route={} tab_type={:?} started_at={} responded_at={} duration_s={:.3} status={} detail={}",
            self.route,
            self.tab_type,
            self.started_at.to_rfc3339(),
            completed_at.to_rfc3339(),
            duration,
            self.status,
            self.detail.clone().unwrap_or_default()
        );
    }
}

pub fn start_request_timer(route: &str, tab_type: Option<&str>) -> RequestTimer {
    let timer = RequestTimer::new(route, tab_type);
    timer.log_received();
    timer
}

pub fn complete_request_timer(timer: &mut RequestTimer, status: u16, detail: Option<String>) {
    timer.mark_status(status, detail);
    timer.log_completed();
}

pub async fn log_llm_timing<T, F, Fut>(
    provider: &str,
    model: &str,
    operation: &str,
    metadata: Option<JsonValue>,
    call: F,
) -> Result<T, anyhow::Error>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, anyhow::Error>>,
{
    let started_at = Utc::now();
    let started_perf = Instant::now();
    let metadata_text = metadata
        .as_ref()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "{}".to_string());
    info!(
        target: TIMING_TARGET,
        "event=llm_request provider={} model={} operation={} started_at={} metadata={}",
        provider,
        model,
        operation,
        started_at.to_rfc3339(),
        metadata_text
    );

    let result = call().await;
    let status = if result.is_err() { "error" } else { "success" };

    let completed_at = Utc::now();
    let duration = started_perf.elapsed().as_secs_f64();
    info!(
        target: TIMING_TARGET,
        "event=llm_response provider={} model={} operation={} completed_at={} duration_s={:.3} status={} metadata={}",
        provider,
        model,
        operation,
        completed_at.to_rfc3339(),
        duration,
        status,
        metadata_text
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn llm_timing_passes_result_through() {
        let ok = log_llm_timing("test", "model", "op", None, || async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: Result<(), _> =
            log_llm_timing("test", "model", "op", None, || async { Err(anyhow!("boom")) }).await;
        assert_eq!(err.unwrap_err().to_string(), "boom");
    }

    #[test]
    fn request_timer_completes_once() {
        let mut timer = start_request_timer("/api/generate", Some("script"));
        complete_request_timer(&mut timer, 400, Some("missing field".to_string()));
        assert!(timer.completed);
        assert_eq!(timer.status, 400);
        timer.mark_status(500, None);
        timer.log_completed();
        assert_eq!(timer.status, 500);
    }
}
