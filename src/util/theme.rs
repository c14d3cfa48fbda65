//! Light/dark theme preference and toggle control.
//!
//! Reads the saved preference from `localStorage`, reflects it as a
//! `data-theme` attribute on the `<html>` element, and injects a floating
//! `.theme-toggle` button whose icon advertises the theme it switches *to*.
//!
//! DESIGN
//! ======
//! Theme logic runs against a [`ThemeHost`] so the same code drives the real
//! DOM ([`DomThemeHost`], hydrate only) and the in-memory host used by tests
//! and server rendering ([`MemoryThemeHost`]).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::{Cell, RefCell};

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "ssap_theme";
/// Attribute on the document element that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Class of the injected toggle button.
pub const TOGGLE_CLASS: &str = "theme-toggle";
/// Accessible label of the toggle button.
pub const TOGGLE_ARIA_LABEL: &str = "Toggle theme";

/// Visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme for a stored value; missing or unknown values mean light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// Next theme given the current attribute value: `dark` goes light,
    /// anything else goes dark.
    #[must_use]
    pub fn toggled_from(current: Option<&str>) -> Self {
        if current == Some("dark") { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle icon shown while this theme is active.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Toggle tooltip shown while this theme is active.
    #[must_use]
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Page environment the theme logic reads and mutates.
pub trait ThemeHost {
    fn stored_theme(&self) -> Option<String>;
    fn persist_theme(&self, value: &str);
    fn document_theme(&self) -> Option<String>;
    fn set_document_theme(&self, value: &str);
    fn has_toggle_control(&self) -> bool;
    /// Create the toggle button, wire its activation to [`toggle`], and
    /// append it to the page body.
    fn mount_toggle_control(&self);
    /// Update the toggle button's icon and title, if it exists.
    fn update_toggle_control(&self, icon: &str, title: &str);
}

/// Read the saved theme, defaulting to light.
pub fn read_preference(host: &impl ThemeHost) -> Theme {
    Theme::from_stored(host.stored_theme().as_deref())
}

/// Set the document theme, persist it, and refresh the toggle control.
pub fn apply(host: &impl ThemeHost, theme: Theme) {
    host.set_document_theme(theme.as_str());
    host.persist_theme(theme.as_str());
    host.update_toggle_control(theme.toggle_icon(), theme.toggle_title());
}

/// Flip the active theme and return the new one.
pub fn toggle(host: &impl ThemeHost) -> Theme {
    let next = Theme::toggled_from(host.document_theme().as_deref());
    apply(host, next);
    next
}

/// Add the toggle control to the page. Returns `false` if it already exists.
pub fn inject_toggle_control(host: &impl ThemeHost) -> bool {
    if host.has_toggle_control() {
        return false;
    }
    host.mount_toggle_control();
    true
}

/// Page-ready entry: inject the control, then apply the saved theme so the
/// control shows the right icon immediately.
pub fn init(host: &impl ThemeHost) -> Theme {
    let theme = read_preference(host);
    inject_toggle_control(host);
    apply(host, theme);
    theme
}

// =============================================================================
// DOM HOST
// =============================================================================

/// The live browser page.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DomThemeHost;

#[cfg(feature = "hydrate")]
impl DomThemeHost {
    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn toggle_element() -> Option<web_sys::Element> {
        Self::document()?
            .query_selector(&format!(".{TOGGLE_CLASS}"))
            .ok()
            .flatten()
    }
}

#[cfg(feature = "hydrate")]
impl ThemeHost for DomThemeHost {
    fn stored_theme(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn persist_theme(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }

    fn document_theme(&self) -> Option<String> {
        Self::document()?
            .document_element()?
            .get_attribute(THEME_ATTRIBUTE)
    }

    fn set_document_theme(&self, value: &str) {
        if let Some(el) = Self::document().and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, value);
        }
    }

    fn has_toggle_control(&self) -> bool {
        Self::toggle_element().is_some()
    }

    fn mount_toggle_control(&self) {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(document) = Self::document() else {
            return;
        };
        let (Ok(button), Some(body)) = (document.create_element("button"), document.body()) else {
            return;
        };
        button.set_class_name(TOGGLE_CLASS);
        let _ = button.set_attribute("aria-label", TOGGLE_ARIA_LABEL);

        let on_click = Closure::wrap(Box::new(move || {
            toggle(&DomThemeHost);
        }) as Box<dyn FnMut()>);
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // Lives as long as the page.
        on_click.forget();

        let _ = body.append_child(&button);
    }

    fn update_toggle_control(&self, icon: &str, title: &str) {
        if let Some(button) = Self::toggle_element() {
            button.set_inner_html(icon);
            let _ = button.set_attribute("title", title);
        }
    }
}

/// Run [`init`] against the live page once the DOM is ready.
#[cfg(feature = "hydrate")]
pub fn init_on_ready() {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(document) = DomThemeHost::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        init(&DomThemeHost);
        return;
    }
    let on_ready = Closure::wrap(Box::new(move || {
        init(&DomThemeHost);
    }) as Box<dyn FnMut()>);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    on_ready.forget();
}

// =============================================================================
// MEMORY HOST
// =============================================================================

/// Icon and title currently shown on the toggle control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleControl {
    pub icon: String,
    pub title: String,
}

/// In-memory page: one storage slot, one attribute, one optional control.
#[derive(Debug, Default)]
pub struct MemoryThemeHost {
    stored: RefCell<Option<String>>,
    attribute: RefCell<Option<String>>,
    control: RefCell<Option<ToggleControl>>,
    mounts: Cell<usize>,
}

impl MemoryThemeHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose storage already holds `value`.
    #[must_use]
    pub fn with_stored(value: &str) -> Self {
        let host = Self::default();
        *host.stored.borrow_mut() = Some(value.to_owned());
        host
    }

    /// Fresh page over the same storage, as after a reload.
    #[must_use]
    pub fn reload(&self) -> Self {
        let host = Self::default();
        host.stored.replace(self.stored.borrow().clone());
        host
    }

    /// Simulate activating the toggle control. `None` if it was never mounted.
    pub fn click_toggle(&self) -> Option<Theme> {
        self.has_toggle_control().then(|| toggle(self))
    }

    #[must_use]
    pub fn control(&self) -> Option<ToggleControl> {
        self.control.borrow().clone()
    }

    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.mounts.get()
    }
}

impl ThemeHost for MemoryThemeHost {
    fn stored_theme(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    fn persist_theme(&self, value: &str) {
        self.stored.replace(Some(value.to_owned()));
    }

    fn document_theme(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }

    fn set_document_theme(&self, value: &str) {
        self.attribute.replace(Some(value.to_owned()));
    }

    fn has_toggle_control(&self) -> bool {
        self.control.borrow().is_some()
    }

    fn mount_toggle_control(&self) {
        self.control.replace(Some(ToggleControl::default()));
        self.mounts.set(self.mounts.get() + 1);
    }

    fn update_toggle_control(&self, icon: &str, title: &str) {
        if let Some(control) = self.control.borrow_mut().as_mut() {
            control.icon = icon.to_owned();
            control.title = title.to_owned();
        }
    }
}
