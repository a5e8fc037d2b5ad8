//! `analyze`: resolve all panels for an idea, concurrently.

use log::info;
use serde_json::{json, Map, Value};
use slp_core::api::AnalysisClient;
use slp_core::{ApiConfig, Endpoint, PanelState};
use std::time::Duration;

/// JSON report for one resolved panel.
pub fn panel_report(state: &PanelState) -> Value {
    match state {
        PanelState::Loaded(data) => json!({ "status": "loaded", "data": data }),
        PanelState::Failed(err) => json!({ "status": "failed", "error": err.to_string() }),
        PanelState::Loading => json!({ "status": "loading" }),
    }
}

/// Report for every endpoint, keyed by endpoint name.
pub fn build_report(results: &[(Endpoint, PanelState)]) -> Value {
    let mut report = Map::new();
    for (endpoint, state) in results {
        report.insert(endpoint.name().to_string(), panel_report(state));
    }
    Value::Object(report)
}

pub async fn run_analyze(
    idea: &str,
    name: &str,
    demo: bool,
    base_url: &str,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    if idea.trim().is_empty() && !demo {
        anyhow::bail!("--idea must not be empty");
    }

    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
    let client = AnalysisClient::new(ApiConfig::new(base_url), timeout)?;

    info!(
        "Analyzing '{}'{} via {}",
        idea,
        if name.is_empty() { String::new() } else { format!(" for {}", name) },
        if demo { "bundled samples" } else { base_url }
    );

    let results = client.resolve_all(idea, demo).await;
    let failed = results
        .iter()
        .filter(|(_, state)| matches!(state, PanelState::Failed(_)))
        .count();
    info!("{} of {} panels loaded", results.len() - failed, results.len());

    println!("{}", serde_json::to_string_pretty(&build_report(&results))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slp_core::FetchError;

    #[test]
    fn test_report_shape() {
        let results = vec![
            (Endpoint::Market, PanelState::Loaded(json!({"MarketTrends": []}))),
            (Endpoint::Pricing, PanelState::Failed(FetchError::Status(502))),
        ];
        let report = build_report(&results);
        assert_eq!(report["market"]["status"], "loaded");
        assert_eq!(report["market"]["data"]["MarketTrends"], json!([]));
        assert_eq!(report["pricing"]["status"], "failed");
        assert_eq!(report["pricing"]["error"], "analysis service returned HTTP 502");
    }

    #[tokio::test]
    async fn test_blank_idea_is_rejected() {
        let result = run_analyze("  ", "", false, "http://127.0.0.1:9", 1).await;
        assert!(result.is_err());
    }
}
