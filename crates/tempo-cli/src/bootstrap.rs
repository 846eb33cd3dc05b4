use anyhow::Context;
use tempo_config::TempoConfig;

/// Load `.env`, then every configuration layer.
///
/// Values are not validated here so `--check` can report what is missing.
pub fn load_config() -> anyhow::Result<TempoConfig> {
    let config = TempoConfig::load_with_dotenv().context("failed to load configuration")?;

    if !config.notion.is_configured() {
        tracing::debug!("record store credentials not configured");
    }
    if !config.llm.is_configured() {
        tracing::debug!("classifier api key not configured");
    }
    tracing::debug!(
        model = %config.llm.model,
        llm_base_url = %config.llm.base_url,
        notion_base_url = %config.notion.base_url,
        "configuration loaded"
    );

    Ok(config)
}
