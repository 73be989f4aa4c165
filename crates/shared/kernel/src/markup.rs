//! Server-side rendering of Dioxus components into embeddable HTML.

use dioxus::dioxus_core::Properties;
use dioxus::prelude::*;
use std::fmt;

/// A rendered, escaped HTML fragment ready to be embedded in a page.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkupFragment(String);

impl MarkupFragment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MarkupFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<MarkupFragment> for String {
    fn from(fragment: MarkupFragment) -> Self {
        fragment.0
    }
}

/// Renders `component` with `props` in a fresh virtual DOM.
///
/// Each call owns its DOM, so calls are independent and may run on any thread.
/// Hydration markers are not emitted.
pub fn render_component<P: Properties>(component: fn(P) -> Element, props: P) -> MarkupFragment {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    MarkupFragment(dioxus_ssr::render(&dom))
}
