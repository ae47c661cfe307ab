use std::env::vars;
use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::table::{DEFAULT_PAGE_SIZE, TableActions, TableConfig};

/// Validated application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    page_size: NonZeroUsize,
    enable_search: bool,
    enable_column_toggle: bool,
    filter_hidden_columns: bool,
    seed_demo_data: bool,
}

// Every variable is optional; defaults are applied in `from_raw`.
#[derive(Debug, Deserialize)]
pub struct RawConfig {
    table_page_size: Option<usize>,
    table_enable_search: Option<bool>,
    table_enable_column_toggle: Option<bool>,
    table_filter_hidden_columns: Option<bool>,
    seed_demo_data: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            enable_search: true,
            enable_column_toggle: true,
            filter_hidden_columns: false,
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Reads `TABLE_*` and `SEED_DEMO_DATA` from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading configuration from environment variables");

        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            table_page_size,
            table_enable_search,
            table_enable_column_toggle,
            table_filter_hidden_columns,
            seed_demo_data,
        } = raw;

        let page_size = match table_page_size {
            Some(size) => match NonZeroUsize::new(size) {
                Some(size) => size,
                None => anyhow::bail!("TABLE_PAGE_SIZE must be at least 1"),
            },
            None => {
                log::info!("TABLE_PAGE_SIZE not set, defaulting to {DEFAULT_PAGE_SIZE}");
                DEFAULT_PAGE_SIZE
            }
        };

        Ok(Self {
            page_size,
            enable_search: table_enable_search.unwrap_or(true),
            enable_column_toggle: table_enable_column_toggle.unwrap_or(true),
            filter_hidden_columns: table_filter_hidden_columns.unwrap_or(false),
            seed_demo_data: seed_demo_data.unwrap_or(true),
        })
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }

    /// Table options for one list, with the global switches applied.
    pub fn table_config(
        &self,
        title: impl Into<String>,
        add_label: impl Into<String>,
        actions: TableActions,
    ) -> TableConfig {
        TableConfig::builder()
            .page_size(self.page_size)
            .enable_search(self.enable_search)
            .enable_column_toggle(self.enable_column_toggle)
            .filter_hidden_columns(self.filter_hidden_columns)
            .title(title)
            .add_label(add_label)
            .actions(actions)
            .build()
    }
}
