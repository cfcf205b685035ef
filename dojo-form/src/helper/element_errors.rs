//! Validation message lists

use crate::element::Element;
use dojo_view::{HtmlEscaper, ViewRenderer};

/// Renders element messages as an unordered list
#[derive(Debug, Clone, Default)]
pub struct FormElementErrors {
    escaper: HtmlEscaper,
}

impl FormElementErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_view<V: ViewRenderer + ?Sized>(view: &V) -> Self {
        Self {
            escaper: HtmlEscaper::new(view.encoding()),
        }
    }

    /// `<ul><li>..</li></ul>`, or an empty string without messages
    pub fn render(&self, element: &Element) -> String {
        if element.messages().is_empty() {
            return String::new();
        }

        let items: Vec<String> = element
            .messages()
            .iter()
            .map(|message| self.escaper.escape(message).into_owned())
            .collect();
        format!("<ul><li>{}</li></ul>", items.join("</li><li>"))
    }
}
