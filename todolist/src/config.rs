//! Build-time configuration for the menu data source.
//!
//! The web bundle has no process environment, so values are baked in when the
//! crate is compiled.

use crate::menu_client::MenuError;

pub const DEFAULT_MENU_TABLE: &str = "menu_items";

#[derive(Clone, Debug, PartialEq)]
pub struct MenuConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl MenuConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_MENU_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Read `TODOLIST_SUPABASE_URL`, `TODOLIST_SUPABASE_ANON_KEY` and the
    /// optional `TODOLIST_MENU_TABLE` as they were set at build time.
    pub fn from_build_env() -> Result<Self, MenuError> {
        Self::from_values(
            option_env!("TODOLIST_SUPABASE_URL"),
            option_env!("TODOLIST_SUPABASE_ANON_KEY"),
            option_env!("TODOLIST_MENU_TABLE"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        api_key: Option<&str>,
        table: Option<&str>,
    ) -> Result<Self, MenuError> {
        let base_url = base_url
            .filter(|v| !v.trim().is_empty())
            .ok_or(MenuError::MissingConfig("TODOLIST_SUPABASE_URL"))?;
        let api_key = api_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(MenuError::MissingConfig("TODOLIST_SUPABASE_ANON_KEY"))?;

        let config = Self::new(base_url.trim(), api_key.trim());
        Ok(match table.filter(|v| !v.trim().is_empty()) {
            Some(table) => config.with_table(table.trim()),
            None => config,
        })
    }
}
