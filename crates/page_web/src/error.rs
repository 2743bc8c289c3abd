use page_interactions::ConfigError;
use thiserror::Error;

/// Failures while wiring the page. Missing page elements are not errors;
/// those features are skipped.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("js: {0}")]
    Js(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_pass_through_unchanged() {
        let cfg_err = page_interactions::PageConfig::from_json(r#"{ "namespace": "" }"#)
            .unwrap_err();
        let expected = cfg_err.to_string();
        let err = WebError::from(cfg_err);
        assert_eq!(err.to_string(), expected);
        assert!(expected.contains("namespace"));
    }
}
