use crate::theme::use_theme;
use dioxus::prelude::*;

/// Page shell. Carries the `dark` class so `dark:` utilities follow the
/// shared color scheme.
#[component]
pub fn Layout(children: Element) -> Element {
    let theme = use_theme();
    let scheme = theme.scheme();

    rsx! {
      div { class: "{scheme}",
        div { class: "min-h-screen flex flex-col bg-white text-gray-900 dark:bg-[#1a1b1e] dark:text-[#C1C2C5] transition-colors",
          {children}
        }
      }
    }
}
