use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "flex flex-col items-center text-center gap-6 py-16",
            h1 { class: "text-5xl font-bold tracking-tight", "Pista Express" }
            p { class: "max-w-xl text-lg text-gray-500 dark:text-gray-400",
                "Fresh pasta, wood-fired pizza and espresso, made to order and ready to go."
            }
            Link {
                class: "rounded-full bg-lime-600 px-6 py-2 font-semibold text-white hover:bg-lime-700 transition-colors",
                to: Route::Menu {},
                "See the menu"
            }
        }
    }
}
