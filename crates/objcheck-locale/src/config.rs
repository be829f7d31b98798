/// Bounds for loading locale tables from a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Maximum number of locale files loaded from a directory.
    pub max_locales_from_directory: usize,
    /// Maximum bytes allowed per locale file.
    pub max_locale_file_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_locales_from_directory: 64,
            max_locale_file_size: 256 * 1024,
        }
    }
}
