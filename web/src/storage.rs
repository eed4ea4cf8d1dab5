use ui::ColorScheme;

#[cfg(target_arch = "wasm32")]
const SCHEME_STORAGE_KEY: &str = "pista-color-scheme";

/// Helper to abstract WebSys LocalStorage interactions for the color scheme.
pub struct SchemeStorage;

impl SchemeStorage {
    pub fn get() -> Option<ColorScheme> {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = web_sys::window()?.local_storage().ok().flatten() {
            if let Ok(Some(value)) = storage.get_item(SCHEME_STORAGE_KEY) {
                return value.parse().ok();
            }
        }
        None
    }

    pub fn set(_scheme: ColorScheme) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(SCHEME_STORAGE_KEY, _scheme.as_str());
        }
    }

    /// The browser's `prefers-color-scheme`, light when unknown.
    pub fn preferred() -> ColorScheme {
        #[cfg(target_arch = "wasm32")]
        if let Some(query) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        {
            if query.matches() {
                return ColorScheme::Dark;
            }
        }
        ColorScheme::default()
    }

    /// Stored choice first, then the browser preference.
    pub fn initial() -> ColorScheme {
        Self::get().unwrap_or_else(Self::preferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_light_outside_the_browser() {
        assert_eq!(SchemeStorage::get(), None);
        assert_eq!(SchemeStorage::initial(), ColorScheme::Light);
    }
}
