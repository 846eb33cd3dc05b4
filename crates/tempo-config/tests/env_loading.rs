//! Integration tests for environment and TOML configuration loading.
//!
//! Uses `figment::Jail` for safe, sandboxed env var and working-directory
//! manipulation.

use figment::Jail;
use pretty_assertions::assert_eq;
use tempo_config::TempoConfig;

#[test]
fn conventional_names_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NOTION_TOKEN", "secret_notion");
        jail.set_env("NOTION_DATABASE_ID", "abc-def");
        jail.set_env("OPENAI_API_KEY", "sk-conventional");
        jail.set_env("OPENAI_MODEL", "deepseek-chat");
        jail.set_env("OPENAI_BASE_URL", "https://api.deepseek.com/v1");

        let config = TempoConfig::load().expect("config loads");
        assert_eq!(config.notion.token, "secret_notion");
        assert_eq!(config.notion.database_id, "abc-def");
        assert_eq!(config.llm.api_key, "sk-conventional");
        assert_eq!(config.llm.model, "deepseek-chat");
        assert_eq!(config.llm.base_url, "https://api.deepseek.com/v1");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn defaults_apply_when_optional_values_absent() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NOTION_TOKEN", "secret_notion");

        let config = TempoConfig::load().expect("config loads");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.notion.base_url, "https://api.notion.com/v1");
        assert_eq!(config.notion.properties.category, "分类");
        assert!(config.validate().is_err());
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_conventional_names() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENAI_MODEL", "gpt-4o-mini");
        jail.set_env("TEMPO_LLM__MODEL", "gpt-4.1");
        jail.set_env("TEMPO_LLM__TIMEOUT_SECS", "12");
        jail.set_env("TEMPO_NOTION__PROPERTIES__CATEGORY", "Category");

        let config = TempoConfig::load().expect("config loads");
        assert_eq!(config.llm.model, "gpt-4.1");
        assert_eq!(config.llm.timeout_secs, 12);
        assert_eq!(config.notion.properties.category, "Category");
        assert_eq!(config.notion.properties.time_type, "时间类型");
        Ok(())
    });
}

#[test]
fn project_toml_is_overridden_by_env() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        std::fs::create_dir_all(".tempo").expect("create .tempo");
        jail.create_file(
            ".tempo/config.toml",
            r#"
[notion]
token = "toml-token"
database_id = "toml-db"
version = "2025-09-03"

[notion.properties]
content = "Name"
date = "Date"

[llm]
api_key = "toml-key"
temperature = 0.0
max_tokens = 16
"#,
        )?;
        jail.set_env("NOTION_DATABASE_ID", "env-db");

        let config = TempoConfig::load().expect("config loads");
        assert_eq!(config.notion.token, "toml-token");
        assert_eq!(config.notion.database_id, "env-db");
        assert_eq!(config.notion.version, "2025-09-03");
        assert_eq!(config.notion.properties.content, "Name");
        assert_eq!(config.notion.properties.date, "Date");
        assert_eq!(config.llm.api_key, "toml-key");
        assert_eq!(config.llm.max_tokens, 16);
        assert!(config.llm.temperature.abs() < f32::EPSILON);
        Ok(())
    });
}

#[test]
fn wrongly_typed_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("TEMPO_LLM__TIMEOUT_SECS", "soon");

        assert!(TempoConfig::load().is_err());
        Ok(())
    });
}
