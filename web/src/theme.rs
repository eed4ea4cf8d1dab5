use crate::storage::SchemeStorage;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use ui::Theme;

/// Provides the app-wide [`Theme`] and persists every change.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let scheme = use_signal(SchemeStorage::initial);

    use_effect(move || {
        let current = scheme();
        SchemeStorage::set(current);
        info!("Color scheme: {current}");
    });

    use_context_provider(|| Theme::new(scheme));

    rsx! {
        {children}
    }
}
