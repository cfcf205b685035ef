//! `dijit/Editor` rendering

use super::{attributes_string, named_attributes};
use crate::element::Element;
use crate::error::{FormError, Result};
use dojo_view::{HtmlEscaper, ViewRenderer};

/// Renders an editor element as a `<div>` holding its escaped value
#[derive(Debug, Clone, Default)]
pub struct DijitFormEditor {
    escaper: HtmlEscaper,
}

impl DijitFormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_view<V: ViewRenderer + ?Sized>(view: &V) -> Self {
        Self {
            escaper: HtmlEscaper::new(view.encoding()),
        }
    }

    pub fn render(&self, element: &Element) -> Result<String> {
        if element.name().is_empty() {
            return Err(FormError::MissingName("DijitFormEditor"));
        }

        let attributes = named_attributes(element.name(), element.attributes());
        Ok(format!(
            "<div {}>{}</div>",
            attributes_string(&attributes, &self.escaper),
            self.escaper.escape(element.value().unwrap_or_default())
        ))
    }
}
