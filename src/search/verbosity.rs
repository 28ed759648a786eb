#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Errors only
    Silent,
    #[default]
    Normal,
    Verbose,
    /// Trace level logging
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn levels_grow_with_verbosity() {
        assert_eq!(Level::from(Verbosity::Silent), Level::ERROR);
        assert_eq!(Level::from(Verbosity::default()), Level::INFO);
        assert!(Level::from(Verbosity::Debug) > Level::from(Verbosity::Verbose));
    }
}
