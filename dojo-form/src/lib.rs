//! Dojo-decorated forms for server-rendered views
//!
//! Form elements created here carry the `data-dojo-type` and
//! `data-dojo-props` attributes their dijits need, and the view helpers render
//! them into markup the Dojo parser understands.
//!
//! ## Example
//!
//! ```
//! use dojo_form::{DijitFormRow, Element, FieldSet, Form};
//!
//! let mut form = Form::new("login");
//! form.add(
//!     FieldSet::new("user")
//!         .with_element(Element::validation_text_box("email").with_label("Email")),
//!     10,
//! );
//! form.add_submit(1, "Sign in");
//!
//! let row = DijitFormRow::new();
//! let email = form
//!     .get("user")
//!     .and_then(|item| match item {
//!         dojo_form::FormItem::FieldSet(fieldset) => fieldset.element("email"),
//!         _ => None,
//!     })
//!     .unwrap();
//! let html = row.render(email).unwrap();
//! assert!(html.contains("data-dojo-type=\"dijit/form/ValidationTextBox\""));
//! ```

pub mod element;
pub mod error;
pub mod fieldset;
pub mod filter;
pub mod form;
pub mod helper;

pub use element::{
    AttributeValue, Attributes, EDITOR_PLUGINS, Element, ElementKind, LabelOptions, LabelPosition,
};
pub use error::{FormError, Result};
pub use fieldset::{FieldSet, FieldSetOptions};
pub use filter::UploaderFilter;
pub use form::{DEFAULT_SUBMIT_PRIORITY, DEFAULT_SUBMIT_TEXT, FieldMessage, Form, FormItem};
pub use helper::{
    DijitFormEditor, DijitFormRow, DijitFormUploaderFileList, FormElementErrors,
    FormElementHelper, FormLabel, attributes_string,
};
