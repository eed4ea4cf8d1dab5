use super::ColorScheme;

/// Icon shown on the color scheme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

/// The toggle shows the scheme it would switch to: a sun while dark, a moon
/// while light.
pub fn theme_icon(scheme: ColorScheme) -> ThemeIcon {
    if scheme.is_dark() {
        ThemeIcon::Sun
    } else {
        ThemeIcon::Moon
    }
}

/// Translucent background of the sticky header.
pub fn header_background(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Dark => "#1a1b1ed2",
        ColorScheme::Light => "#ffffffd2",
    }
}

/// Opaque background of the mobile dropdown.
pub fn dropdown_background(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Dark => "#1a1b1e",
        ColorScheme::Light => "#ffffff",
    }
}

const LINK_BASE: &str =
    "block leading-none px-4 py-4 sm:px-3 sm:py-2 sm:rounded text-lg font-medium no-underline transition-colors";

pub fn link_class(scheme: ColorScheme, active: bool) -> String {
    let tone = match (scheme, active) {
        (ColorScheme::Light, true) => "bg-lime-50 text-lime-700 hover:bg-lime-50",
        (ColorScheme::Dark, true) => "bg-lime-400/20 text-lime-300 hover:bg-lime-400/20",
        (ColorScheme::Light, false) => "text-gray-700 hover:bg-gray-50",
        (ColorScheme::Dark, false) => "text-[#C1C2C5] hover:bg-[#25262b]",
    };
    format!("{LINK_BASE} {tone}")
}

pub fn toggle_class(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Dark => "text-lime-400 hover:bg-lime-400/10",
        ColorScheme::Light => "text-lime-600 hover:bg-lime-50",
    }
}

pub fn burger_class(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Dark => "text-[#C1C2C5] hover:bg-[#25262b]",
        ColorScheme::Light => "text-gray-700 hover:bg-gray-50",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_the_complement_of_the_scheme() {
        let mut scheme = ColorScheme::Light;
        assert_eq!(theme_icon(scheme), ThemeIcon::Moon);
        scheme.toggle();
        assert_eq!(theme_icon(scheme), ThemeIcon::Sun);
    }

    #[test]
    fn active_links_use_lime() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert!(link_class(scheme, true).contains("text-lime"));
            assert!(!link_class(scheme, false).contains("lime"));
        }
    }

    #[test]
    fn backgrounds_follow_the_scheme() {
        assert_ne!(
            header_background(ColorScheme::Light),
            header_background(ColorScheme::Dark)
        );
        assert!(header_background(ColorScheme::Dark).starts_with(dropdown_background(ColorScheme::Dark)));
        assert!(header_background(ColorScheme::Light).starts_with(dropdown_background(ColorScheme::Light)));
    }
}
