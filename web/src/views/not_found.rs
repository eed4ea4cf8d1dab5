use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "flex flex-col items-center gap-4 py-16 text-center",
            h1 { class: "text-4xl font-bold", "Page not found" }
            p { class: "font-mono text-gray-500", "/{path}" }
            Link { class: "text-lime-600 hover:underline", to: Route::Home {}, "Back home" }
        }
    }
}
