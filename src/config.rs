// src/config.rs

use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
const ENV_CONTENT_URL: &str = "FINAWARE_CONTENT_URL";
#[cfg(not(target_arch = "wasm32"))]
const ENV_CONTENT_KEY: &str = "FINAWARE_CONTENT_KEY";
#[cfg(not(target_arch = "wasm32"))]
const ENV_ADMIN: &str = "FINAWARE_ADMIN";
#[cfg(not(target_arch = "wasm32"))]
const ENV_DATA_DIR: &str = "FINAWARE_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the hosted content store. `None` → in-memory content.
    pub content_url: Option<String>,
    pub content_api_key: String,
    pub admin_enabled: bool,
    /// Directory for the quiz result file (native only).
    pub data_dir: PathBuf,
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl AppConfig {
    /// Builds the config from a key lookup. Keys are the lower-case setting
    /// names: `content_url`, `content_key`, `admin`, `data_dir`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            content_url: lookup("content_url").as_deref().and_then(normalize),
            content_api_key: lookup("content_key")
                .as_deref()
                .and_then(normalize)
                .unwrap_or_default(),
            admin_enabled: lookup("admin").as_deref().is_some_and(is_truthy),
            data_dir: lookup("data_dir")
                .as_deref()
                .and_then(normalize)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_lookup(|key| {
            let var = match key {
                "content_url" => ENV_CONTENT_URL,
                "content_key" => ENV_CONTENT_KEY,
                "admin" => ENV_ADMIN,
                "data_dir" => ENV_DATA_DIR,
                _ => return None,
            };
            std::env::var(var).ok()
        })
    }

    /// Build-time env, then `<meta name="finaware-…">`, then `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::from_lookup(|key| {
            from_build_env(key)
                .or_else(|| from_meta(key))
                .or_else(|| from_local_storage(key))
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn from_build_env(key: &str) -> Option<String> {
    let value = match key {
        "content_url" => option_env!("FINAWARE_CONTENT_URL"),
        "content_key" => option_env!("FINAWARE_CONTENT_KEY"),
        "admin" => option_env!("FINAWARE_ADMIN"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
fn from_meta(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name='finaware-{}']", key.replace('_', "-"));
    document
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

#[cfg(target_arch = "wasm32")]
fn from_local_storage(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(&format!("finaware_{key}")).ok()?
}
