//! `--check`: report configuration and probe both services.

use serde::Serialize;
use tempo_config::{LlmConfig, NotionConfig, TempoConfig};
use tempo_llm::ChatClient;
use tempo_store::RecordStoreClient;

use crate::cli::OutputFormat;
use crate::output;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionStatus {
    pub service: &'static str,
    pub ok: bool,
    pub detail: String,
}

impl ConnectionStatus {
    fn ok(service: &'static str, detail: String) -> Self {
        Self {
            service,
            ok: true,
            detail,
        }
    }

    fn failed(service: &'static str, detail: impl Into<String>) -> Self {
        Self {
            service,
            ok: false,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub settings: Vec<Setting>,
    pub connections: Vec<ConnectionStatus>,
}

impl CheckReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.connections.iter().all(|connection| connection.ok)
    }
}

pub async fn handle(config: &TempoConfig, format: OutputFormat) -> anyhow::Result<()> {
    let report = run_checks(config).await;
    output::print_check(&report, format)?;
    if !report.passed() {
        anyhow::bail!("connection check failed");
    }
    Ok(())
}

pub async fn run_checks(config: &TempoConfig) -> CheckReport {
    CheckReport {
        settings: settings(config),
        connections: vec![
            check_store(&config.notion).await,
            check_classifier(&config.llm).await,
        ],
    }
}

/// Non-secret settings verbatim; secrets only as set/missing.
pub fn settings(config: &TempoConfig) -> Vec<Setting> {
    vec![
        secret("NOTION_TOKEN", &config.notion.token),
        secret("NOTION_DATABASE_ID", &config.notion.database_id),
        plain("notion.base_url", &config.notion.base_url),
        secret("OPENAI_API_KEY", &config.llm.api_key),
        plain("OPENAI_MODEL", &config.llm.model),
        plain("OPENAI_BASE_URL", &config.llm.base_url),
    ]
}

fn secret(name: &'static str, value: &str) -> Setting {
    let value = if value.trim().is_empty() {
        "missing"
    } else {
        "set"
    };
    Setting {
        name,
        value: value.to_string(),
    }
}

fn plain(name: &'static str, value: &str) -> Setting {
    Setting {
        name,
        value: value.to_string(),
    }
}

async fn check_store(config: &NotionConfig) -> ConnectionStatus {
    const SERVICE: &str = "notion";
    if !config.is_configured() {
        return ConnectionStatus::failed(SERVICE, "skipped: token or database id missing");
    }
    let client = match RecordStoreClient::new(config) {
        Ok(client) => client,
        Err(error) => return ConnectionStatus::failed(SERVICE, error.to_string()),
    };
    match client.test_connection().await {
        Ok(title) => ConnectionStatus::ok(SERVICE, format!("database '{title}'")),
        Err(error) => {
            tracing::error!(%error, "record store connection test failed");
            ConnectionStatus::failed(SERVICE, error.to_string())
        }
    }
}

async fn check_classifier(config: &LlmConfig) -> ConnectionStatus {
    const SERVICE: &str = "llm";
    if !config.is_configured() {
        return ConnectionStatus::failed(SERVICE, "skipped: api key missing");
    }
    let client = match ChatClient::new(config) {
        Ok(client) => client,
        Err(error) => return ConnectionStatus::failed(SERVICE, error.to_string()),
    };
    match client.test_connection().await {
        Ok(reply) => ConnectionStatus::ok(SERVICE, format!("model {} replied '{reply}'", client.model())),
        Err(error) => {
            tracing::error!(%error, "classifier connection test failed");
            ConnectionStatus::failed(SERVICE, error.to_string())
        }
    }
}
