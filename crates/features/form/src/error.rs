use std::borrow::Cow;

/// Errors raised while loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Attaches context to `config`-crate results.
pub trait ConfigErrorExt<T> {
    /// Wraps the error with a human-readable context string.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
