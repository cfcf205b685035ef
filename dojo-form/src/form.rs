//! Dojo forms

use crate::element::{AttributeValue, Attributes, Element};
use crate::error::{FormError, Result};
use crate::fieldset::FieldSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Priority used by [`Form::add_submit`] callers that have no preference
pub const DEFAULT_SUBMIT_PRIORITY: i32 = 1;

/// Label used by [`Form::add_submit`] callers that have no preference
pub const DEFAULT_SUBMIT_TEXT: &str = "Save";

/// A top-level form member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormItem {
    Element(Element),
    FieldSet(FieldSet),
}

impl FormItem {
    pub fn name(&self) -> &str {
        match self {
            FormItem::Element(element) => element.name(),
            FormItem::FieldSet(fieldset) => fieldset.name(),
        }
    }
}

impl From<Element> for FormItem {
    fn from(element: Element) -> Self {
        FormItem::Element(element)
    }
}

impl From<FieldSet> for FormItem {
    fn from(fieldset: FieldSet) -> Self {
        FormItem::FieldSet(fieldset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Prioritized {
    priority: i32,
    item: FormItem,
}

/// A validation message addressed by Dojo query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    /// Query selecting the input, e.g. `input[name="user[email]"]`
    pub input: String,
    /// Last message reported for the input
    pub message: String,
}

/// A form decorated for Dojo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    name: String,
    attributes: Attributes,
    items: Vec<Prioritized>,
}

impl Form {
    /// A `dijit/form/Form` posting its values
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_dojo_type(name, "dijit/form/Form")
    }

    /// A form managed by `dojox/form/Manager`
    pub fn manager(name: impl Into<String>) -> Self {
        Self::with_dojo_type(name, "dojox/form/Manager")
    }

    fn with_dojo_type(name: impl Into<String>, dojo_type: &str) -> Self {
        let name = name.into();
        let mut attributes = Attributes::new();
        attributes.insert("method".to_string(), "POST".into());
        attributes.insert("data-dojo-type".to_string(), dojo_type.into());
        attributes.insert("name".to_string(), name.as_str().into());

        Self {
            name,
            attributes,
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add an element or fieldset.
    ///
    /// Items are kept highest priority first; equal priorities keep insertion
    /// order. An item with an existing name replaces it.
    pub fn add(&mut self, item: impl Into<FormItem>, priority: i32) -> &mut Self {
        let item = item.into();
        self.remove(item.name());

        let index = self
            .items
            .iter()
            .position(|existing| existing.priority < priority)
            .unwrap_or(self.items.len());
        trace!(form = %self.name, item = item.name(), priority, "Adding form item");
        self.items.insert(index, Prioritized { priority, item });
        self
    }

    /// Add a Dojo submit button named `submit`
    pub fn add_submit(&mut self, priority: i32, show_text: &str) -> &mut Self {
        let id = format!("{}{}Button", show_text.to_lowercase(), self.name);
        let submit = Element::submit("submit")
            .with_attribute("value", show_text)
            .with_attribute("id", id);
        self.add(submit, priority)
    }

    pub fn remove(&mut self, name: &str) -> Option<FormItem> {
        let index = self.items.iter().position(|p| p.item.name() == name)?;
        Some(self.items.remove(index).item)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&FormItem> {
        self.items.iter().map(|p| &p.item).find(|item| item.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormItem> {
        self.items
            .iter_mut()
            .map(|p| &mut p.item)
            .find(|item| item.name() == name)
    }

    /// Items in priority order
    pub fn items(&self) -> impl Iterator<Item = &FormItem> {
        self.items.iter().map(|p| &p.item)
    }

    /// Messages for every fieldset element that has any, as Dojo queries
    pub fn messages(&self) -> Vec<FieldMessage> {
        let mut messages = Vec::new();
        for item in self.items() {
            let FormItem::FieldSet(fieldset) = item else {
                continue;
            };
            for (element, list) in fieldset.messages() {
                if let Some(message) = list.last() {
                    messages.push(FieldMessage {
                        input: format!("input[name=\"{}[{}]\"]", fieldset.name(), element),
                        message: message.clone(),
                    });
                }
            }
        }
        messages
    }

    /// Messages of one element or fieldset, keyed by element name
    pub fn element_messages(&self, name: &str) -> Result<IndexMap<String, Vec<String>>> {
        match self.get(name) {
            Some(FormItem::Element(element)) => {
                let mut messages = IndexMap::new();
                if !element.messages().is_empty() {
                    messages.insert(element.name().to_string(), element.messages().to_vec());
                }
                Ok(messages)
            }
            Some(FormItem::FieldSet(fieldset)) => Ok(fieldset.messages()),
            None => Err(FormError::InvalidElement(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(form: &Form) -> Vec<&str> {
        form.items().map(FormItem::name).collect()
    }

    #[test]
    fn test_form_seed_attributes() {
        let form = Form::new("login");
        assert_eq!(form.attribute("method"), Some(&"POST".into()));
        assert_eq!(form.attribute("data-dojo-type"), Some(&"dijit/form/Form".into()));

        let manager = Form::manager("login");
        assert_eq!(manager.attribute("method"), Some(&"POST".into()));
        assert_eq!(manager.attribute("data-dojo-type"), Some(&"dojox/form/Manager".into()));
    }

    #[test]
    fn test_priority_order() {
        let mut form = Form::new("f");
        form.add(Element::text_box("a"), 0)
            .add(Element::text_box("b"), 10)
            .add(Element::text_box("c"), 0)
            .add(Element::text_box("d"), 5);

        assert_eq!(names(&form), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_add_submit() {
        let mut form = Form::new("profile");
        form.add(Element::text_box("name"), 0)
            .add_submit(DEFAULT_SUBMIT_PRIORITY, DEFAULT_SUBMIT_TEXT);

        let Some(FormItem::Element(submit)) = form.get("submit") else {
            panic!("submit missing");
        };
        assert_eq!(submit.id(), Some("saveprofileButton"));
        assert_eq!(submit.attribute("value"), Some(&"Save".into()));
        assert_eq!(submit.input_type(), Some("submit"));
        assert_eq!(names(&form), ["submit", "name"]);
    }

    #[test]
    fn test_messages_as_dojo_queries() {
        let mut user = FieldSet::new("user")
            .with_element(Element::text_box("name"))
            .with_element(Element::text_box("email"))
            .with_element(Element::text_box("phone"));
        if let Some(email) = user.element_mut("email") {
            email.set_messages(vec!["Required".into(), "Not an email".into()]);
        }
        if let Some(phone) = user.element_mut("phone") {
            phone.add_message("Too short");
        }

        let mut form = Form::manager("signup");
        form.add(Element::text_box("top").with_messages(["Top level"]), 0)
            .add(user, 0);

        assert_eq!(
            form.messages(),
            vec![
                FieldMessage {
                    input: "input[name=\"user[email]\"]".to_string(),
                    message: "Not an email".to_string(),
                },
                FieldMessage {
                    input: "input[name=\"user[phone]\"]".to_string(),
                    message: "Too short".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_element_messages() {
        let mut form = Form::new("f");
        form.add(Element::text_box("age").with_messages(["Too young"]), 0);

        let messages = form.element_messages("age").unwrap();
        assert_eq!(messages["age"], ["Too young"]);

        assert_eq!(
            form.element_messages("missing").unwrap_err(),
            FormError::InvalidElement("missing".to_string())
        );
    }

    #[test]
    fn test_replace_by_name() {
        let mut form = Form::new("f");
        form.add(Element::text_box("a"), 0).add(Element::date_text_box("a"), 3);

        assert_eq!(names(&form), ["a"]);
        assert!(form.remove("a").is_some());
        assert!(!form.has("a"));
    }
}
