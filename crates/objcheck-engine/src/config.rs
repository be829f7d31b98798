/// Controls validator construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Locale whose table is consulted before the default table.
    pub locale: Option<String>,
    /// When true, unknown rule names fail construction instead of execution.
    pub reject_unknown_rules: bool,
}

impl ValidatorConfig {
    /// Config selecting `locale`, everything else default.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..Self::default()
        }
    }
}
