use serde::Deserialize;

use crate::config::MenuConfig;
use crate::menu::MenuSource;
use crate::types::MenuRecord;

/// Shown when a failure carries no description of its own.
pub const FALLBACK_ERROR: &str = "Failed to load menu";

/// Client for the Supabase REST endpoint holding the menu table
pub struct SupabaseMenuClient {
    config: MenuConfig,
    client: reqwest::Client,
}

impl SupabaseMenuClient {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Active rows only, ascending by the order column.
    pub fn query_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*&is_active=eq.true&order=oorder.asc",
            self.config.base_url, self.config.table
        )
    }

    pub async fn fetch_active_items(&self) -> Result<Vec<MenuRecord>, MenuError> {
        let url = self.query_url();
        tracing::debug!("Requesting menu from {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::warn!("Menu query failed with status {}", status);
            return Err(MenuError::ApiError(api_error_message(&error_text)));
        }

        let records: Vec<MenuRecord> = response.json().await?;
        Ok(records)
    }
}

impl MenuSource for SupabaseMenuClient {
    async fn fetch_active(&self) -> Result<Vec<MenuRecord>, MenuError> {
        self.fetch_active_items().await
    }
}

#[derive(Deserialize)]
struct PostgrestError {
    #[serde(default)]
    message: Option<String>,
}

/// Pull `message` out of a PostgREST error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(PostgrestError { message: Some(message) }) => message.trim().to_string(),
        Ok(PostgrestError { message: None }) => String::new(),
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("{0}")]
    ApiError(String),
    #[error("{0} is not configured")]
    MissingConfig(&'static str),
}

impl MenuError {
    /// Text for the error view.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let client = SupabaseMenuClient::new(MenuConfig::new("https://abc.supabase.co/", "anon"));
        assert_eq!(
            client.query_url(),
            "https://abc.supabase.co/rest/v1/menu_items?select=*&is_active=eq.true&order=oorder.asc"
        );
    }

    #[test]
    fn test_query_url_custom_table() {
        let config = MenuConfig::new("http://localhost:54321", "anon").with_table("nav");
        let client = SupabaseMenuClient::new(config);
        assert!(client.query_url().starts_with("http://localhost:54321/rest/v1/nav?"));
    }

    #[test]
    fn test_postgrest_message_is_extracted() {
        let body = r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.menu_items\" does not exist"}"#;
        assert_eq!(api_error_message(body), "relation \"public.menu_items\" does not exist");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(api_error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_empty_description_uses_fallback() {
        assert_eq!(MenuError::ApiError(String::new()).display_message(), FALLBACK_ERROR);
        assert_eq!(MenuError::ApiError(api_error_message("{}")).display_message(), FALLBACK_ERROR);
    }

    #[test]
    fn test_description_is_kept() {
        let err = MenuError::ApiError("JWT expired".to_string());
        assert_eq!(err.display_message(), "JWT expired");
    }
}
