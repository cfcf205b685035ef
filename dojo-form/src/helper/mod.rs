//! View helpers rendering Dojo form elements

pub mod editor;
pub mod element_errors;
pub mod form_element;
pub mod label;
pub mod row;
pub mod uploader;

pub use editor::DijitFormEditor;
pub use element_errors::FormElementErrors;
pub use form_element::FormElementHelper;
pub use label::FormLabel;
pub use row::DijitFormRow;
pub use uploader::DijitFormUploaderFileList;

use crate::element::{AttributeValue, Attributes};
use dojo_view::HtmlEscaper;

/// Render attributes as `key="value"` pairs separated by spaces.
///
/// Values are escaped. `true` flags render as `key="key"`; `false` flags are
/// left out.
pub fn attributes_string(attributes: &Attributes, escaper: &HtmlEscaper) -> String {
    attributes
        .iter()
        .filter_map(|(key, value)| {
            let key = escaper.escape(key);
            match value {
                AttributeValue::Flag(true) => Some(format!("{key}=\"{key}\"")),
                AttributeValue::Flag(false) => None,
                AttributeValue::Text(text) => {
                    Some(format!("{}=\"{}\"", key, escaper.escape(text)))
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Element attributes with `name` set to the element name
pub(crate) fn named_attributes(name: &str, attributes: &Attributes) -> Attributes {
    let mut attributes = attributes.clone();
    attributes.insert("name".to_string(), AttributeValue::Text(name.to_string()));
    attributes
}
