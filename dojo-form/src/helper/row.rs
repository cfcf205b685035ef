//! Form rows: label, element and errors together

use super::{FormElementErrors, FormElementHelper, FormLabel};
use crate::element::{AttributeValue, Attributes, Element, LabelPosition};
use crate::error::Result;
use dojo_view::{HtmlEscaper, ViewRenderer};

/// Class added to elements that have messages unless configured otherwise
pub const DEFAULT_INPUT_ERROR_CLASS: &str = "input-error";

/// Renders a label (when the element has one), the element and its errors
#[derive(Debug, Clone)]
pub struct DijitFormRow {
    input_error_class: String,
    label_position: LabelPosition,
    render_errors: bool,
    label_attributes: Attributes,
    escaper: HtmlEscaper,
    label_helper: FormLabel,
    element_helper: FormElementHelper,
    errors_helper: FormElementErrors,
}

impl DijitFormRow {
    pub fn new() -> Self {
        Self {
            input_error_class: DEFAULT_INPUT_ERROR_CLASS.to_string(),
            label_position: LabelPosition::default(),
            render_errors: true,
            label_attributes: Attributes::new(),
            escaper: HtmlEscaper::default(),
            label_helper: FormLabel::new(),
            element_helper: FormElementHelper::new(),
            errors_helper: FormElementErrors::new(),
        }
    }

    pub fn for_view<V: ViewRenderer + ?Sized>(view: &V) -> Self {
        Self {
            escaper: HtmlEscaper::new(view.encoding()),
            label_helper: FormLabel::for_view(view),
            element_helper: FormElementHelper::for_view(view),
            errors_helper: FormElementErrors::for_view(view),
            ..Self::new()
        }
    }

    pub fn with_input_error_class(mut self, class: impl Into<String>) -> Self {
        self.input_error_class = class.into();
        self
    }

    pub fn input_error_class(&self) -> &str {
        &self.input_error_class
    }

    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    pub fn with_render_errors(mut self, render_errors: bool) -> Self {
        self.render_errors = render_errors;
        self
    }

    /// Label attributes for elements that bring none of their own
    pub fn with_label_attributes(mut self, attributes: Attributes) -> Self {
        self.label_attributes = attributes;
        self
    }

    pub fn render(&self, element: &Element) -> Result<String> {
        let mut element = element.clone();

        if !element.messages().is_empty() && !self.input_error_class.is_empty() {
            let class = match element.attribute("class").and_then(AttributeValue::as_str) {
                Some(existing) => format!("{} {}", existing, self.input_error_class),
                None => self.input_error_class.clone(),
            };
            element.set_attribute("class", class);
        }

        let errors = if self.render_errors {
            self.errors_helper.render(&element)
        } else {
            String::new()
        };
        let element_string = self.element_helper.render(&element)?;

        let input_type = element.input_type();
        let label = match element.label() {
            Some(label) if !label.is_empty() && input_type != Some("hidden") => label,
            _ => return Ok(element_string + &errors),
        };

        let options = element.label_options();
        let mut label = if options.disable_html_escape {
            label.to_string()
        } else {
            self.escaper.escape(label).into_owned()
        };

        let mut markup = if matches!(input_type, Some("multi_checkbox" | "radio")) {
            format!("<fieldset><legend>{}</legend>{}</fieldset>", label, element_string)
        } else {
            let has_id = element.id().is_some();
            let label_attributes = if element.label_attributes().is_empty() {
                &self.label_attributes
            } else {
                element.label_attributes()
            };

            let (mut open, mut close) = if has_id && !options.always_wrap {
                label = format!(
                    "{}{}{}",
                    self.label_helper.open_tag_for(&element),
                    label,
                    self.label_helper.close_tag()
                );
                (String::new(), "")
            } else {
                (self.label_helper.open_tag(label_attributes), self.label_helper.close_tag())
            };

            if !has_id || options.always_wrap {
                label = format!("<span>{}</span>", label);
            }

            // Buttons carry their label inside
            if element.kind().is_button() {
                open.clear();
                close = "";
                label.clear();
            }

            match options.label_position.unwrap_or(self.label_position) {
                LabelPosition::Prepend => format!("{}{}{}{}", open, label, element_string, close),
                LabelPosition::Append => format!("{}{}{}{}", open, element_string, label, close),
            }
        };

        markup.push_str(&errors);
        Ok(markup)
    }
}

impl Default for DijitFormRow {
    fn default() -> Self {
        Self::new()
    }
}
