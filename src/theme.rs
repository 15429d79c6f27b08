//! Dark/light theme toggle with a persisted preference and a system-signal
//! fallback.

pub(crate) const THEME_KEY: &str = "darkMode";
const STORED_ENABLED: &str = "enabled";
const STORED_DISABLED: &str = "disabled";

#[cfg(target_arch = "wasm32")]
const TOGGLE_ID: &str = "darkModeToggle";
#[cfg(target_arch = "wasm32")]
const DARK_CLASS: &str = "dark-mode";
#[cfg(target_arch = "wasm32")]
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub(crate) fn stored_value(self) -> &'static str {
        match self {
            Self::Light => STORED_DISABLED,
            Self::Dark => STORED_ENABLED,
        }
    }

    pub(crate) fn from_stored(value: &str) -> Option<Self> {
        match value {
            STORED_ENABLED => Some(Self::Dark),
            STORED_DISABLED => Some(Self::Light),
            _ => None,
        }
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub(crate) fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label names the state the control switches to.
    pub(crate) fn control_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

/// A stored preference wins; otherwise the system signal decides; otherwise
/// light.
pub(crate) fn initial_theme(stored: Option<Theme>, system_dark: bool) -> Theme {
    stored.unwrap_or(if system_dark { Theme::Dark } else { Theme::Light })
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn mount(document: &web_sys::Document) -> crate::dom::Mounted {
    use wasm_bindgen::JsCast;

    use crate::dom::{self, Mounted};

    // No control means the whole feature stays inert, initialization
    // included.
    let Some(control) = document
        .get_element_by_id(TOGGLE_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return Mounted::Inactive;
    };

    let initial = initial_theme(
        read_stored_theme(),
        dom::media_query_matches(COLOR_SCHEME_QUERY),
    );
    apply_theme(document, &control, initial);

    let document = document.clone();
    let toggled_control = control.clone();
    dom::listen(control.as_ref(), "click", move |_| {
        let next = applied_theme(&document).toggled();
        apply_theme(&document, &toggled_control, next);
    });
    Mounted::Active
}

/// Apply the visual class, persist the choice, and refresh the control's
/// label and pressed state in one step.
#[cfg(target_arch = "wasm32")]
fn apply_theme(document: &web_sys::Document, control: &web_sys::HtmlElement, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
    persist_theme(theme);
    control.set_text_content(Some(theme.control_label()));
    let _ = control.set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" });
}

#[cfg(target_arch = "wasm32")]
fn applied_theme(document: &web_sys::Document) -> Theme {
    let dark = document
        .document_element()
        .map(|root| root.class_list().contains(DARK_CLASS))
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(target_arch = "wasm32")]
fn read_stored_theme() -> Option<Theme> {
    let value = crate::dom::local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_stored(&value)
}

#[cfg(target_arch = "wasm32")]
fn persist_theme(theme: Theme) {
    if let Some(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.stored_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system_signal() {
        assert_eq!(initial_theme(Some(Theme::Light), true), Theme::Light);
        assert_eq!(initial_theme(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn system_signal_decides_when_nothing_is_stored() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn toggling_twice_returns_to_the_original_theme() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn stored_values_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(theme.stored_value()), Some(theme));
        }
        assert_eq!(Theme::from_stored("purple"), None);
    }
}
