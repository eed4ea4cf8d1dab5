use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "w-full max-w-3xl mx-auto space-y-4",
            h1 { class: "text-4xl font-bold", "About us" }
            p { class: "text-gray-500 dark:text-gray-400",
                "A small family kitchen serving Italian street food since 2019. Everything is cooked to order, nothing sits under a heat lamp."
            }
        }
    }
}
