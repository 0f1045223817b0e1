//! `bench` subcommand: drive concurrent flows against a running gateway

use crate::api::{ChatRequest, ChatResponse};
use futures::future::join_all;
use std::time::{Duration, Instant};

/// The canonical three-turn flow: intent, a non-id, then an order id.
const FLOW_MESSAGES: [&str; 3] = ["我想查订单", "abc", "123456"];

pub async fn run(url: String, concurrency: usize) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()?;

    let start = Instant::now();
    let flows = (0..concurrency).map(|i| run_flow(&client, &url, i));
    let results = join_all(flows).await;
    let total = start.elapsed();

    let mut latencies = Vec::with_capacity(concurrency * FLOW_MESSAGES.len());
    for result in results {
        latencies.extend(result?);
    }
    latencies.sort_unstable();

    let summary = Summary::from_sorted(&latencies);
    println!(
        "concurrency={concurrency} requests={} total_time_s={:.2}",
        latencies.len(),
        total.as_secs_f64()
    );
    println!(
        "latency_ms avg={:.1} p50={} p95={} max={}",
        summary.avg, summary.p50, summary.p95, summary.max
    );

    Ok(())
}

/// Walk one session through the canonical flow, collecting server-reported
/// latencies.
async fn run_flow(
    client: &reqwest::Client,
    url: &str,
    index: usize,
) -> Result<Vec<u64>, reqwest::Error> {
    let session_id = format!("bench_{index}");
    let mut latencies = Vec::with_capacity(FLOW_MESSAGES.len());

    for message in FLOW_MESSAGES {
        let request = ChatRequest {
            session_id: session_id.clone(),
            message: message.to_string(),
        };
        let response: ChatResponse = client
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        latencies.push(response.latency_ms);
    }

    Ok(latencies)
}

#[derive(Debug)]
struct Summary {
    avg: f64,
    p50: u64,
    p95: u64,
    max: u64,
}

impl Summary {
    /// Summarize an ascending latency list. Below 20 samples the p95 column
    /// reports the max instead of an extrapolated percentile.
    fn from_sorted(latencies: &[u64]) -> Self {
        let n = latencies.len();
        if n == 0 {
            return Self {
                avg: 0.0,
                p50: 0,
                p95: 0,
                max: 0,
            };
        }

        let sum: u64 = latencies.iter().sum();
        let max = latencies[n - 1];
        Self {
            avg: sum as f64 / n as f64,
            p50: latencies[n / 2],
            p95: if n >= 20 {
                latencies[n * 95 / 100 - 1]
            } else {
                max
            },
            max,
        }
    }
}
