// Dojo integration - Dojo toolkit support for server-rendered views
//
// This library bundles the bootstrap container, which accumulates modules,
// stylesheets, dijits and scripts while a page is built, with Dojo-decorated
// form elements and their view helpers.

// Re-export the view layer
pub use dojo_view::*;

// Re-export optional crates
#[cfg(feature = "form")]
pub use dojo_form;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Capture,
        Container,
        ContainerOptions,
        Dijit,
        DijitParams,
        DijitStyle,
        Doctype,
        DojoError,
        DojoHelper,
        JsValue,
        PageView,
        RenderSettings,
        ViewRenderer,
    };

    #[cfg(feature = "form")]
    pub use dojo_form::{
        DijitFormRow, Element, ElementKind, FieldSet, FieldSetOptions, Form, FormElementHelper,
        FormError, FormItem,
    };
}
