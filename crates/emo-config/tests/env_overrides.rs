//! Environment variables sit on top of every file layer.

use emo_config::EmoConfig;
use emo_core::enums::DayKeyMode;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("EMOTRACE_TREND__CONCURRENCY", "3");
        jail.set_env("EMOTRACE_TREND__DAY_KEY", "strict");
        jail.set_env("EMOTRACE_SESSION__ORG_ID", "acme");
        jail.set_env("EMOTRACE_SESSION__API_KEY", "key-from-env");

        let config = EmoConfig::load().expect("config loads");
        assert_eq!(config.trend.concurrency, 3);
        assert_eq!(config.trend.day_key, DayKeyMode::Strict);
        assert!(config.session.is_configured());
        assert_eq!(
            config.session.context().api_key.as_deref(),
            Some("key-from-env")
        );
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        std::fs::create_dir_all(".emotrace").expect("create .emotrace");
        jail.create_file(".emotrace/config.toml", "[trend]\nwindow_days = 30\n")?;
        jail.set_env("EMOTRACE_TREND__WINDOW_DAYS", "7");

        let config = EmoConfig::load().expect("config loads");
        assert_eq!(config.trend.window_days, 7);
        Ok(())
    });
}

#[test]
fn env_list_values_parse() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("EMOTRACE_EVIDENCE__TARGET_EMOTIONS", "[anger, frustration]");

        let config = EmoConfig::load().expect("config loads");
        assert_eq!(config.evidence.target_emotions, vec!["anger", "frustration"]);
        Ok(())
    });
}
