//! Single-state view routing.
//!
//! The whole interface is driven by one [`NavigationState`]: the view being
//! shown and the id of the last property a visitor opened. There is no
//! history and no back-stack; "back" is just another forward navigation.
//!
//! Scrolling is not the router's business. It owns a [`Viewport`]
//! collaborator and pokes it once per navigation, strictly after the state
//! change is committed, so a scroll can never observe the outgoing view.

use crate::i18n::Translator;

/// The five views of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Properties,
    PropertyDetail,
    About,
    Contact,
}

impl View {
    /// Menu entries, in navbar order. Detail is reachable only through a
    /// listing card, never from the menu.
    pub const MENU: [View; 4] = [View::Home, View::Properties, View::About, View::Contact];

    /// Translation key of the menu label.
    pub fn menu_key(&self) -> &'static str {
        match self {
            View::Home => "navbar.menu.home",
            View::Properties | View::PropertyDetail => "navbar.menu.properties",
            View::About => "navbar.menu.about",
            View::Contact => "navbar.menu.contact",
        }
    }

    /// Translation key of the window title.
    pub fn title_key(&self) -> &'static str {
        match self {
            View::Home => "title.home",
            View::Properties => "title.properties",
            View::PropertyDetail => "title.property",
            View::About => "title.about",
            View::Contact => "title.contact",
        }
    }
}

/// The window title for a view, in the active language.
pub fn view_title(view: View, translator: &Translator) -> String {
    translator.t(view.title_key())
}

/// What the interface is currently showing.
///
/// `selected_property_id` deliberately survives navigations that do not
/// carry an id: leaving the detail page and coming back shows the same
/// property until another card overwrites the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_view: View,
    pub selected_property_id: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_view: View::Home,
            selected_property_id: None,
        }
    }
}

/// External scroll surface reset on every navigation.
pub trait Viewport {
    fn scroll_to_top(&mut self);
}

/// No-op surface for headless callers (the CLI commands).
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct NullViewport;

impl Viewport for NullViewport {
    fn scroll_to_top(&mut self) {}
}

/// Sole mutator of the navigation state.
pub struct Router<V: Viewport> {
    state: NavigationState,
    viewport: V,
}

impl<V: Viewport> Router<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            state: NavigationState::default(),
            viewport,
        }
    }

    pub fn current_view(&self) -> View {
        self.state.current_view
    }

    pub fn selected_property_id(&self) -> Option<&str> {
        self.state.selected_property_id.as_deref()
    }

    /// Switches to `view`. The selected property id is overwritten only
    /// when `entity_id` carries one; a bare navigation retains it. The
    /// viewport is scrolled after the state commit, once per call, even
    /// when the target view equals the current one.
    pub fn navigate(&mut self, view: View, entity_id: Option<&str>) {
        self.state.current_view = view;
        if let Some(id) = entity_id {
            self.state.selected_property_id = Some(id.to_string());
        }
        self.viewport.scroll_to_top();
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

// ============================================================================
// Tests
// ============================================================================
