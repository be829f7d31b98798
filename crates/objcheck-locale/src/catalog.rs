use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use tracing::{debug, error};

use crate::code::MessageCode;
use crate::config::CatalogConfig;
use crate::error::{LocaleError, Result};
use crate::table::LocaleTable;

const DEFAULT_TABLE: &str = include_str!("../locales/default.json");
const JA_TABLE: &str = include_str!("../locales/ja.json");

/// File stem that replaces the default table when loading a directory.
pub const DEFAULT_FILE_STEM: &str = "default";

static BUILTIN: LazyLock<Arc<LocaleCatalog>> = LazyLock::new(|| Arc::new(LocaleCatalog::builtin()));

/// A default table plus named locale tables.
///
/// The default table is always consulted as the last fallback. Named
/// tables are selected by locale code.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    default: LocaleTable,
    locales: HashMap<String, LocaleTable>,
    config: CatalogConfig,
}

impl LocaleCatalog {
    /// Create a catalog with only a default table.
    pub fn new(default: LocaleTable) -> Self {
        Self::with_config(default, CatalogConfig::default())
    }

    /// Create a catalog with only a default table and explicit config.
    pub fn with_config(default: LocaleTable, config: CatalogConfig) -> Self {
        Self {
            default,
            locales: HashMap::new(),
            config,
        }
    }

    /// The bundled default and `ja` tables.
    pub fn builtin() -> Self {
        let mut catalog = Self::new(embedded_table(DEFAULT_FILE_STEM, DEFAULT_TABLE));
        catalog.register_table("ja", embedded_table("ja", JA_TABLE));
        catalog
    }

    /// A process-wide shared copy of [`LocaleCatalog::builtin`].
    pub fn shared() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Register a named table from JSON text.
    pub fn register(&mut self, locale: &str, table_json: &str) -> Result<()> {
        let table = LocaleTable::from_json_str(locale, table_json)?;
        self.register_table(locale, table);
        Ok(())
    }

    /// Register a named table.
    pub fn register_table(&mut self, locale: impl Into<String>, table: LocaleTable) {
        let locale = locale.into();
        debug!(locale = %locale, entries = table.len(), "registered locale table");
        self.locales.insert(locale, table);
    }

    /// Replace the default table.
    pub fn set_default(&mut self, table: LocaleTable) {
        self.default = table;
    }

    /// Load the bundled tables, then every `<locale>.json` in `path`.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, CatalogConfig::default())
    }

    /// Load the bundled tables, then every `<locale>.json` in `path`, with explicit config.
    ///
    /// `default.json` replaces the default table. Symlinked locale files are refused.
    pub fn from_directory_with_config(path: &Path, config: CatalogConfig) -> Result<Self> {
        let mut catalog = Self::builtin();
        catalog.config = config;
        let mut loaded_count = 0usize;

        let entries = std::fs::read_dir(path)
            .map_err(|err| LocaleError::LoadFailed(format!("{}: {err}", path.display())))?;

        for entry in entries {
            let entry = entry.map_err(|err| LocaleError::LoadFailed(err.to_string()))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some(stem) = file_name.strip_suffix(".json") else {
                continue;
            };
            let entry_path = entry.path();
            let path_metadata = std::fs::symlink_metadata(&entry_path)
                .map_err(|err| LocaleError::LoadFailed(err.to_string()))?;
            let file_type = path_metadata.file_type();

            if file_type.is_symlink() {
                return Err(LocaleError::LoadFailed(format!(
                    "refusing to load locale symlink: {file_name}"
                )));
            }
            if !file_type.is_file() {
                continue;
            }
            if !is_locale_code(stem) {
                return Err(LocaleError::LoadFailed(format!(
                    "unrecognized locale filename: {file_name}"
                )));
            }

            loaded_count = loaded_count.saturating_add(1);
            if loaded_count > catalog.config.max_locales_from_directory {
                return Err(LocaleError::LoadFailed(format!(
                    "locale count exceeds configured max ({}): {}",
                    catalog.config.max_locales_from_directory, loaded_count
                )));
            }

            let content = read_bounded(
                &entry_path,
                &path_metadata,
                catalog.config.max_locale_file_size,
            )?;
            let table = LocaleTable::from_json_str(stem, &content)?;

            if stem == DEFAULT_FILE_STEM {
                debug!(entries = table.len(), "replaced default locale table");
                catalog.set_default(table);
            } else {
                catalog.register_table(stem, table);
            }
        }

        Ok(catalog)
    }

    /// The table consulted when the selected locale has no template.
    pub fn default_table(&self) -> &LocaleTable {
        &self.default
    }

    /// Look up a named table. Unknown codes yield `None`.
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        self.locales.get(locale)
    }

    /// Whether a named table exists for `locale`.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Registered locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Codes that resolve to neither `locale`'s table nor the default table.
    pub fn missing_codes(&self, locale: Option<&str>) -> Vec<MessageCode> {
        let selected = locale.and_then(|code| self.table(code));
        MessageCode::ALL
            .into_iter()
            .filter(|code| {
                selected.and_then(|table| table.get(code.as_str())).is_none()
                    && self.default.get(code.as_str()).is_none()
            })
            .collect()
    }

    /// Get catalog configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

fn embedded_table(locale: &str, json: &str) -> LocaleTable {
    LocaleTable::from_json_str(locale, json).unwrap_or_else(|err| {
        error!(locale, error = %err, "embedded locale table is unreadable");
        LocaleTable::default()
    })
}

fn is_locale_code(stem: &str) -> bool {
    !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn read_bounded(
    path: &Path,
    path_metadata: &std::fs::Metadata,
    max_bytes: usize,
) -> Result<String> {
    let file = std::fs::File::open(path).map_err(|err| {
        LocaleError::LoadFailed(format!("failed opening locale {}: {err}", path.display()))
    })?;
    let opened_metadata = file
        .metadata()
        .map_err(|err| LocaleError::LoadFailed(err.to_string()))?;

    #[cfg(unix)]
    {
        if !same_file_identity(path_metadata, &opened_metadata) {
            return Err(LocaleError::LoadFailed(format!(
                "locale file changed during load: {}",
                path.display()
            )));
        }
    }
    #[cfg(not(unix))]
    let _ = path_metadata;

    if opened_metadata.len() > max_bytes as u64 {
        return Err(LocaleError::LoadFailed(format!(
            "locale file too large ({} bytes): {}",
            opened_metadata.len(),
            path.display()
        )));
    }

    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(|err| {
            LocaleError::LoadFailed(format!("failed reading locale {}: {err}", path.display()))
        })?;
    if content.len() > max_bytes {
        return Err(LocaleError::LoadFailed(format!(
            "locale file too large while reading: {}",
            path.display()
        )));
    }

    Ok(content)
}

#[cfg(unix)]
fn same_file_identity(
    path_metadata: &std::fs::Metadata,
    opened_metadata: &std::fs::Metadata,
) -> bool {
    use std::os::unix::fs::MetadataExt;
    path_metadata.dev() == opened_metadata.dev() && path_metadata.ino() == opened_metadata.ino()
}
