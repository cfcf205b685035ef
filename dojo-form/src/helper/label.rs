//! `<label>` tags

use super::attributes_string;
use crate::element::{AttributeValue, Attributes, Element};
use dojo_view::{HtmlEscaper, ViewRenderer};

#[derive(Debug, Clone, Default)]
pub struct FormLabel {
    escaper: HtmlEscaper,
}

impl FormLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_view<V: ViewRenderer + ?Sized>(view: &V) -> Self {
        Self {
            escaper: HtmlEscaper::new(view.encoding()),
        }
    }

    pub fn open_tag(&self, attributes: &Attributes) -> String {
        if attributes.is_empty() {
            return "<label>".to_string();
        }
        format!("<label {}>", attributes_string(attributes, &self.escaper))
    }

    /// Opening tag pointing at the element through its id
    pub fn open_tag_for(&self, element: &Element) -> String {
        let mut attributes = element.label_attributes().clone();
        if let Some(id) = element.id() {
            attributes.insert("for".to_string(), AttributeValue::Text(id.to_string()));
        }
        self.open_tag(&attributes)
    }

    pub fn close_tag(&self) -> &'static str {
        "</label>"
    }
}
