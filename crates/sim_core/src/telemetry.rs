//! Telemetry bootstrap (tracing + optional Prometheus metrics).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryCfg {
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
    /// e.g. 127.0.0.1:9100; unset disables the exporter.
    pub metrics_addr: Option<String>,
}

impl Default for TelemetryCfg {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            json_logs: Some(false),
            metrics_addr: None,
        }
    }
}

fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}

impl TelemetryCfg {
    pub fn load_default() -> Result<Self> {
        let path = data_root().join("config/telemetry.toml");
        let mut cfg = if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<TelemetryCfg>(&txt).context("parse telemetry TOML")?
        } else {
            Self::default()
        };
        if let Ok(lvl) = std::env::var("LOG_LEVEL") {
            cfg.log_level = Some(lvl);
        }
        if let Ok(addr) = std::env::var("METRICS_ADDR") {
            cfg.metrics_addr = Some(addr);
        }
        if let Some(json) = std::env::var("JSON_LOGS").ok().and_then(|v| v.parse().ok()) {
            cfg.json_logs = Some(json);
        }
        Ok(cfg)
    }
}

pub struct TelemetryGuard;

pub fn init_telemetry(cfg: &TelemetryCfg) -> Result<TelemetryGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if cfg.json_logs.unwrap_or(false) {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
    if let Some(addr) = &cfg.metrics_addr {
        let addr: std::net::SocketAddr = match addr.parse() {
            Ok(a) => a,
            Err(_e) => {
                metrics::counter!("sim.errors_total", "site" => "telemetry.parse_addr").increment(1);
                std::net::SocketAddr::from(([127, 0, 0, 1], 9100))
            }
        };
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let _ = builder.with_http_listener(addr).install();
    }
    tracing::info!(
        target: "telemetry",
        log_level = ?cfg.log_level,
        json_logs = ?cfg.json_logs,
        metrics_addr = ?cfg.metrics_addr,
        "telemetry initialized"
    );
    Ok(TelemetryGuard)
}
