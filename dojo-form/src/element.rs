//! Dojo-decorated form elements

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Editor toolbar plugins used by [`ElementKind::Editor`]
pub const EDITOR_PLUGINS: &str = "extraPlugins: ['foreColor', 'hiliteColor', \
{name:'dijit/_editor/plugins/FontChoice', command:'fontName', generic:true}, \
{name:'dojox/editor/plugins/Save', iconClassPrefix:'dijitIcon', command:'Save'}]";

/// An HTML attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean attribute (`multiple`, `disabled`, ...)
    Flag(bool),
    /// Text attribute
    Text(String),
}

impl AttributeValue {
    /// Text content, if this is a text attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Flag(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

/// Ordered element attributes
pub type Attributes = IndexMap<String, AttributeValue>;

/// Where a label is placed relative to its element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Prepend,
    Append,
}

/// Label rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelOptions {
    /// Wrap the element in its label even when it has an id
    pub always_wrap: bool,
    /// Label text is trusted markup
    pub disable_html_escape: bool,
    /// Overrides the row helper's label position
    pub label_position: Option<LabelPosition>,
}

/// Element flavours and the attributes they are created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Undecorated element; attributes are set by the caller
    Plain,
    Button,
    ComboBox,
    CurrencyTextBox,
    DateTextBox,
    Editor,
    File,
    MultiCheckbox,
    NumberTextBox,
    ResetButton,
    Select,
    Submit,
    TextBox,
    UploaderFileList,
    ValidationTextBox,
}

impl ElementKind {
    /// Attributes every element of this kind starts with
    pub fn seed_attributes(&self) -> Vec<(&'static str, AttributeValue)> {
        match self {
            ElementKind::ComboBox => vec![("type", "select".into())],
            ElementKind::Select => vec![
                ("type", "select".into()),
                ("data-dojo-type", "dijit/form/Select".into()),
            ],
            ElementKind::CurrencyTextBox
            | ElementKind::DateTextBox
            | ElementKind::ValidationTextBox => vec![("type", "text".into())],
            ElementKind::Editor => vec![("type", "editor".into())],
            ElementKind::File => vec![
                ("type", "file".into()),
                ("multiple", true.into()),
                ("data-dojo-type", "dojox/form/FileInput".into()),
            ],
            ElementKind::MultiCheckbox => vec![("type", "multi_checkbox".into())],
            ElementKind::NumberTextBox => vec![
                ("type", "text".into()),
                ("data-dojo-type", "dijit/form/NumberTextBox".into()),
            ],
            ElementKind::ResetButton => vec![("type", "reset".into())],
            ElementKind::Submit => vec![("type", "submit".into())],
            ElementKind::UploaderFileList => vec![
                ("type", "uploaderFileList".into()),
                ("data-dojo-type", "dojox/form/uploader/FileList".into()),
            ],
            _ => Vec::new(),
        }
    }

    /// Dojo attributes applied after the seed attributes, overriding them
    pub fn dojo_attributes(&self) -> Vec<(&'static str, AttributeValue)> {
        match self {
            ElementKind::Button => vec![
                ("data-dojo-type", "dijit/form/Button".into()),
                ("type", "button".into()),
            ],
            ElementKind::ComboBox => vec![("data-dojo-type", "dijit/form/ComboBox".into())],
            ElementKind::CurrencyTextBox => vec![
                ("data-dojo-type", "dijit/form/CurrencyTextBox".into()),
                (
                    "data-dojo-props",
                    "constraints:{fractional:true}, currency:'USD', invalidMessage:'Invalid Amount. Cents are required.'"
                        .into(),
                ),
            ],
            ElementKind::DateTextBox => vec![("data-dojo-type", "dijit/form/DateTextBox".into())],
            ElementKind::Editor => vec![
                ("data-dojo-type", "dijit/Editor".into()),
                ("data-dojo-props", EDITOR_PLUGINS.into()),
            ],
            ElementKind::MultiCheckbox => vec![("data-dojo-type", "dijit/form/CheckBox".into())],
            ElementKind::ResetButton => vec![
                ("data-dojo-type", "dijit/form/Button".into()),
                (
                    "data-dojo-props",
                    "label:'Reset Form', onClick:function(){return true;}".into(),
                ),
            ],
            ElementKind::Submit => vec![
                ("data-dojo-type", "dijit/form/Button".into()),
                (
                    "data-dojo-props",
                    "iconClass: 'dijitIcon dijitIconSave', showLabel: false".into(),
                ),
            ],
            ElementKind::TextBox => vec![
                ("type", "text".into()),
                ("data-dojo-type", "dijit/form/TextBox".into()),
            ],
            ElementKind::ValidationTextBox => {
                vec![("data-dojo-type", "dijit/form/ValidationTextBox".into())]
            }
            _ => Vec::new(),
        }
    }

    /// Is this rendered as a `<button>`?
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            ElementKind::Button | ElementKind::ResetButton | ElementKind::Submit
        )
    }
}

/// A form element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    kind: ElementKind,
    attributes: Attributes,
    value: Option<String>,
    label: Option<String>,
    label_attributes: Attributes,
    label_options: LabelOptions,
    value_options: IndexMap<String, String>,
    messages: Vec<String>,
}

impl Element {
    /// Create an element of the given kind with its seed and Dojo attributes
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in kind.seed_attributes().into_iter().chain(kind.dojo_attributes()) {
            attributes.insert(key.to_string(), value);
        }

        Self {
            name: name.into(),
            kind,
            attributes,
            value: None,
            label: None,
            label_attributes: Attributes::new(),
            label_options: LabelOptions::default(),
            value_options: IndexMap::new(),
            messages: Vec::new(),
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Plain)
    }

    pub fn button(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Button)
    }

    pub fn combo_box(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::ComboBox)
    }

    pub fn currency_text_box(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::CurrencyTextBox)
    }

    pub fn date_text_box(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::DateTextBox)
    }

    pub fn editor(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Editor)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::File)
    }

    pub fn multi_checkbox(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::MultiCheckbox)
    }

    pub fn number_text_box(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::NumberTextBox)
    }

    pub fn reset_button(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::ResetButton)
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Select)
    }

    pub fn submit(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Submit)
    }

    pub fn text_box(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::TextBox)
    }

    pub fn uploader_file_list(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::UploaderFileList)
    }

    pub fn validation_text_box(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::ValidationTextBox)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Set an attribute; an existing key keeps its position
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<AttributeValue> {
        self.attributes.shift_remove(key)
    }

    /// The `type` attribute
    pub fn input_type(&self) -> Option<&str> {
        self.attribute("type").and_then(AttributeValue::as_str)
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attribute("id").and_then(AttributeValue::as_str)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_attributes(&self) -> &Attributes {
        &self.label_attributes
    }

    pub fn with_label_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.label_attributes.insert(key.into(), value.into());
        self
    }

    pub fn label_options(&self) -> LabelOptions {
        self.label_options
    }

    pub fn with_label_options(mut self, options: LabelOptions) -> Self {
        self.label_options = options;
        self
    }

    /// Choices for select and multi-checkbox elements, `value => label`
    pub fn value_options(&self) -> &IndexMap<String, String> {
        &self.value_options
    }

    pub fn with_value_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.value_options.insert(value.into(), label.into());
        self
    }

    /// Validation messages, oldest first
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn set_messages(&mut self, messages: Vec<String>) {
        self.messages = messages;
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }
}
