use crate::theme::{burger_class, ColorScheme};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    opened: bool,
    scheme: ColorScheme,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
}

/// Hamburger control for the mobile dropdown. Hidden from `sm` up.
#[component]
pub fn Burger(props: Props) -> Element {
    let tone = burger_class(props.scheme);
    let expanded = if props.opened { "true" } else { "false" };

    rsx! {
        button {
            class: "sm:hidden p-2 rounded transition-colors focus:outline-none cursor-pointer {tone}",
            "aria-label": "Toggle navigation",
            "aria-expanded": expanded,
            onclick: move |evt| props.onclick.call(evt),
            svg {
                class: "w-5 h-5",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                if props.opened {
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M6 18L18 6M6 6l12 12",
                    }
                } else {
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M4 6h16M4 12h16M4 18h16",
                    }
                }
            }
        }
    }
}
