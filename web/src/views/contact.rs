use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "w-full max-w-3xl mx-auto space-y-4",
            h1 { class: "text-4xl font-bold", "Contact" }
            dl { class: "grid grid-cols-[auto_1fr] gap-x-6 gap-y-2",
                dt { class: "font-semibold", "Phone" }
                dd { a { class: "hover:text-lime-600", href: "tel:+15550142", "+1 555 0142" } }
                dt { class: "font-semibold", "Email" }
                dd { a { class: "hover:text-lime-600", href: "mailto:hello@pistaexpress.com", "hello@pistaexpress.com" } }
                dt { class: "font-semibold", "Hours" }
                dd { "Tue to Sun, 11:30 to 22:00" }
            }
        }
    }
}
