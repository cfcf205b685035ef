//! Fieldsets grouping related elements

use crate::element::{AttributeValue, Attributes, Element};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fieldset creation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSetOptions {
    /// Expose the fieldset to its widget as `data-dojo-attach-point`
    pub create_dojo_attach_point: bool,
}

/// A named group of elements.
///
/// Element names are unique within a fieldset; adding an element with an
/// existing name replaces it in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldSet {
    name: String,
    attributes: Attributes,
    elements: IndexMap<String, Element>,
}

impl FieldSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, FieldSetOptions::default())
    }

    pub fn with_options(name: impl Into<String>, options: FieldSetOptions) -> Self {
        let name = name.into();
        let mut attributes = Attributes::new();
        if options.create_dojo_attach_point {
            attributes.insert(
                "data-dojo-attach-point".to_string(),
                AttributeValue::Text(name.clone()),
            );
        }

        Self {
            name,
            attributes,
            elements: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn add(&mut self, element: Element) -> &mut Self {
        self.elements.insert(element.name().to_string(), element);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.add(element);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements.get_mut(name)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Messages keyed by element name, only for elements that have any
    pub fn messages(&self) -> IndexMap<String, Vec<String>> {
        self.elements
            .values()
            .filter(|element| !element.messages().is_empty())
            .map(|element| (element.name().to_string(), element.messages().to_vec()))
            .collect()
    }

    /// Assign messages to elements by name; unknown names are ignored
    pub fn set_messages(&mut self, messages: IndexMap<String, Vec<String>>) {
        for (name, list) in messages {
            if let Some(element) = self.elements.get_mut(&name) {
                element.set_messages(list);
            }
        }
    }
}
