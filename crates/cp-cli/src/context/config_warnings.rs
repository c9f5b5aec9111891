use cp_config::{CoparentConfig, DEFAULT_BASE_URL};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CoparentConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CoparentConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url() == DEFAULT_BASE_URL && has_single_underscore(&env_keys, "COPARENT_API") {
        warnings.push(
            "API base URL is the default while COPARENT_API_* env vars exist. Use double underscores (example: COPARENT_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.session.dir.trim().is_empty() && has_single_underscore(&env_keys, "COPARENT_SESSION") {
        warnings.push(
            "Session dir is the default while COPARENT_SESSION_* env vars exist. Use double underscores (example: COPARENT_SESSION__DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore(keys: &[String], section: &str) -> bool {
    let nested = format!("{section}__");
    let flat = format!("{section}_");
    keys.iter()
        .any(|key| key.starts_with(&flat) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use cp_config::CoparentConfig;
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = CoparentConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("COPARENT_API_BASE_URL".to_string(), "https://x".to_string()),
                ("COPARENT_SESSION_DIR".to_string(), "/tmp/cp".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_for_nested_keys() {
        let config = CoparentConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("COPARENT_API__BASE_URL".to_string(), "https://x".to_string()),
                ("COPARENT_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
