//! Generic element rendering, dispatching on element kind and type

use super::{DijitFormEditor, DijitFormUploaderFileList, attributes_string, named_attributes};
use crate::element::{AttributeValue, Element, ElementKind};
use crate::error::{FormError, Result};
use dojo_view::{HtmlEscaper, ViewRenderer};

/// Renders any element with the markup its kind calls for
#[derive(Debug, Clone, Default)]
pub struct FormElementHelper {
    escaper: HtmlEscaper,
    xhtml: bool,
    editor: DijitFormEditor,
    uploader: DijitFormUploaderFileList,
}

impl FormElementHelper {
    /// HTML output with UTF-8 escaping
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_view<V: ViewRenderer + ?Sized>(view: &V) -> Self {
        Self {
            escaper: HtmlEscaper::new(view.encoding()),
            xhtml: view.is_xhtml(),
            editor: DijitFormEditor::for_view(view),
            uploader: DijitFormUploaderFileList::for_view(view),
        }
    }

    pub fn render(&self, element: &Element) -> Result<String> {
        match element.kind() {
            ElementKind::Editor => return self.editor.render(element),
            ElementKind::UploaderFileList => return Ok(self.uploader.render(element)),
            _ => {}
        }

        if element.name().is_empty() {
            return Err(FormError::MissingName("FormElementHelper"));
        }

        if matches!(element.input_type(), Some("select" | "multi_checkbox")) {
            return Ok(self.render_select(element));
        }

        let mut attributes = named_attributes(element.name(), element.attributes());
        if let Some(value) = element.value() {
            attributes.insert("value".to_string(), AttributeValue::Text(value.to_string()));
        }
        let attributes = attributes_string(&attributes, &self.escaper);

        if element.kind().is_button() {
            let content = match element.label() {
                Some(label) if element.label_options().disable_html_escape => label.to_string(),
                Some(label) => self.escaper.escape(label).into_owned(),
                None => String::new(),
            };
            return Ok(format!("<button {}>{}</button>", attributes, content));
        }

        let close = if self.xhtml { " />" } else { ">" };
        Ok(format!("<input {}{}", attributes, close))
    }

    fn render_select(&self, element: &Element) -> String {
        let mut attributes = named_attributes(element.name(), element.attributes());
        attributes.shift_remove("type");
        if element.input_type() == Some("multi_checkbox") {
            attributes.insert("multiple".to_string(), AttributeValue::Flag(true));
        }

        let options: String = element
            .value_options()
            .iter()
            .map(|(value, label)| {
                let selected = if element.value() == Some(value.as_str()) {
                    " selected=\"selected\""
                } else {
                    ""
                };
                format!(
                    "<option value=\"{}\"{}>{}</option>",
                    self.escaper.escape(value),
                    selected,
                    self.escaper.escape(label)
                )
            })
            .collect();

        format!(
            "<select {}>{}</select>",
            attributes_string(&attributes, &self.escaper),
            options
        )
    }
}
