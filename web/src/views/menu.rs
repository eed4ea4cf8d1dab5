use dioxus::prelude::*;

struct Dish {
    name: &'static str,
    description: &'static str,
    price: &'static str,
}

const DISHES: &[Dish] = &[
    Dish {
        name: "Margherita",
        description: "Tomato, fior di latte, basil",
        price: "9.50",
    },
    Dish {
        name: "Pistacchio",
        description: "Mortadella, burrata, crushed pistachio",
        price: "13.00",
    },
    Dish {
        name: "Cacio e pepe",
        description: "Tonnarelli, pecorino romano, black pepper",
        price: "11.00",
    },
    Dish {
        name: "Tiramisu",
        description: "Mascarpone, savoiardi, espresso",
        price: "6.50",
    },
];

#[component]
pub fn Menu() -> Element {
    rsx! {
        div { class: "w-full max-w-3xl mx-auto space-y-8",
            h1 { class: "text-4xl font-bold text-center", "Menu" }
            ul { class: "divide-y divide-gray-200 dark:divide-[#373A40]",
                for dish in DISHES {
                    li { key: "{dish.name}", class: "flex items-baseline justify-between gap-4 py-4",
                        div {
                            h2 { class: "text-lg font-semibold", "{dish.name}" }
                            p { class: "text-sm text-gray-500 dark:text-gray-400", "{dish.description}" }
                        }
                        span { class: "font-mono text-lime-700 dark:text-lime-300", "€{dish.price}" }
                    }
                }
            }
        }
    }
}
