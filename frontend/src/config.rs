use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const PREFERENCES_KEY: &str = "fraudetective.preferences";

pub const PAGE_SIZES: [u32; 2] = [10, 20];

/// Origin of the fraud-detection API, fixed at build time.
pub fn api_base_url() -> &'static str {
    normalize_base(option_env!("FRAUDETECTIVE_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL
    } else {
        trimmed
    }
}

pub fn log_level() -> log::LevelFilter {
    option_env!("FRAUDETECTIVE_LOG")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Listing preferences remembered across visits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub page_size: u32,
    pub fraud_only: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZES[0],
            fraud_only: false,
        }
    }
}

impl Preferences {
    fn sanitized(mut self) -> Self {
        if !PAGE_SIZES.contains(&self.page_size) {
            self.page_size = PAGE_SIZES[0];
        }
        self
    }

    fn parse(raw: &str) -> Self {
        serde_json::from_str::<Preferences>(raw)
            .map(Preferences::sanitized)
            .unwrap_or_default()
    }
}

pub fn load_preferences() -> Preferences {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(PREFERENCES_KEY) {
                return Preferences::parse(&raw);
            }
        }
    }
    Preferences::default()
}

pub fn save_preferences(prefs: &Preferences) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(prefs) {
                if storage.set_item(PREFERENCES_KEY, &raw).is_err() {
                    log::warn!("could not persist preferences");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        assert_eq!(normalize_base("http://api.local:8000/"), "http://api.local:8000");
        assert_eq!(normalize_base("  "), DEFAULT_API_URL);
    }

    #[test]
    fn preferences_fall_back_on_garbage() {
        assert_eq!(Preferences::parse("not json"), Preferences::default());
        assert_eq!(Preferences::parse(r#"{"page_size":10}"#), Preferences::default());
    }

    #[test]
    fn unknown_page_size_is_reset() {
        let prefs = Preferences::parse(r#"{"page_size":37,"fraud_only":true}"#);
        assert_eq!(prefs.page_size, 10);
        assert!(prefs.fraud_only);

        let prefs = Preferences::parse(r#"{"page_size":20,"fraud_only":false}"#);
        assert_eq!(prefs.page_size, 20);
    }
}
