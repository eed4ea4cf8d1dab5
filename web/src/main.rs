use dioxus::prelude::*;
use theme::ThemeProvider;

use config::NavConfig;
use ui::{Layout, NavigationHeader};
use views::{About, Contact, Home, Menu, NotFound};

mod config;
mod storage;
mod theme;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/menu")]
        Menu {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Pista Express" }

        ThemeProvider { Router::<Route> {} }
    }
}

#[component]
fn SiteLayout() -> Element {
    let links = use_hook(|| NavConfig::load().links);
    // Derived on every render so the header follows history navigation too.
    let current = use_route::<Route>();

    rsx! {
        Layout {
            NavigationHeader { links, current_path: current.to_string() }

            main { class: "flex-grow w-full max-w-[1200px] mx-auto px-4 sm:px-6 lg:px-8 py-10",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_match_the_link_config() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Menu {}.to_string(), ui::MENU_PATH);
        assert_eq!(Route::About {}.to_string(), "/about");
        assert_eq!(Route::Contact {}.to_string(), "/contact");
    }

    #[test]
    fn every_configured_link_resolves_to_a_page() {
        for link in NavConfig::load().links {
            let route: Route = link.path.parse().unwrap();
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} has no page",
                link.path
            );
        }
    }
}
