use super::burger::Burger;
use super::icons::{MoonIcon, SunIcon};
use super::{HeaderState, NavLink};
use crate::theme::{
    dropdown_background, header_background, link_class, theme_icon, toggle_class, use_theme,
    ColorScheme, ThemeIcon,
};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Height of the sticky header in pixels. The mobile dropdown hangs right
/// below it.
pub const HEADER_HEIGHT: u32 = 70;

/// Target of the "Menu" call to action, independent of the link list.
pub const MENU_PATH: &str = "/menu";

const LOGO: Asset = asset!("/assets/logo.svg");

/// Site header: logo, navigation links, the "Menu" button and the color
/// scheme toggle.
///
/// Links are drawn inline from the `sm` breakpoint up and inside a dropdown
/// opened by the hamburger below it. `current_path` is the route reported by
/// the host router on each render.
#[component]
pub fn NavigationHeader(links: Vec<NavLink>, current_path: String) -> Element {
    let mut state = use_signal(|| HeaderState::new(current_path.clone()));
    let known = links.clone();

    use_effect(use_reactive((&current_path,), move |(current_path,)| {
        if state.write().follow_route(&current_path) {
            debug!(
                "Active link resynced to {current_path} ({} selected)",
                state.peek().selected_count(&known)
            );
        }
    }));

    rsx! {
        HeaderBar { links, state }
    }
}

/// Draws the header for a given state. Every control writes back to `state`.
#[component]
fn HeaderBar(links: Vec<NavLink>, state: Signal<HeaderState>) -> Element {
    let mut theme = use_theme();
    let scheme = theme.scheme();
    let snapshot = state();
    let header_bg = header_background(scheme);
    let dropdown_bg = dropdown_background(scheme);
    let toggle_tone = toggle_class(scheme);

    rsx! {
        header {
            class: "sticky top-0 z-40 w-full backdrop-blur-[15px]",
            style: "height: {HEADER_HEIGHT}px; background-color: {header_bg};",
            div { class: "relative mx-auto flex h-full max-w-[1200px] items-center justify-between px-4",
                // Logo area
                div { class: "flex items-center gap-4",
                    Burger {
                        opened: snapshot.is_menu_open(),
                        scheme,
                        onclick: move |_| state.write().toggle_menu(),
                    }
                    img {
                        src: LOGO,
                        width: "150",
                        height: "75",
                        alt: "image of pista express logo",
                    }
                }

                // Inline links
                nav { class: "hidden sm:flex items-center gap-1",
                    for link in links.iter() {
                        NavItem {
                            key: "{link.path}",
                            link: link.clone(),
                            active: snapshot.is_active(&link.path),
                            scheme,
                            on_select: move |path: String| state.write().click_link(&path),
                        }
                    }
                }

                // Mobile dropdown
                if snapshot.is_menu_open() {
                    div {
                        class: "pop-top-right absolute left-0 right-0 z-10 overflow-hidden rounded-b-md border border-t-0 border-gray-200 dark:border-[#373A40] sm:hidden",
                        style: "top: {HEADER_HEIGHT}px; background-color: {dropdown_bg};",
                        for link in links.iter() {
                            NavItem {
                                key: "{link.path}",
                                link: link.clone(),
                                active: snapshot.is_active(&link.path),
                                scheme,
                                on_select: move |path: String| state.write().click_link(&path),
                            }
                        }
                    }
                }

                div { class: "flex items-center justify-center gap-3",
                    Link {
                        class: "inline-flex h-[30px] items-center rounded-full bg-lime-600 px-4 text-sm font-semibold text-white hover:bg-lime-700 transition-colors",
                        to: MENU_PATH,
                        "Menu"
                    }
                    button {
                        class: "flex h-[34px] w-[34px] items-center justify-center rounded-full transition-colors cursor-pointer {toggle_tone}",
                        title: "Toggle color scheme",
                        onclick: move |_| theme.toggle(),
                        {
                            match theme_icon(scheme) {
                                ThemeIcon::Sun => rsx! { SunIcon {} },
                                ThemeIcon::Moon => rsx! { MoonIcon {} },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(
    link: NavLink,
    active: bool,
    scheme: ColorScheme,
    on_select: EventHandler<String>,
) -> Element {
    let class = link_class(scheme, active);
    let path = link.path.clone();

    rsx! {
        Link {
            class: "{class}",
            to: link.path.clone(),
            onclick: move |_| {
                debug!("Navigation link selected: {path}");
                on_select.call(path.clone());
            },
            "{link.label}"
        }
    }
}
