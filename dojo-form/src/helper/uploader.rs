//! `dojox/form/uploader/FileList` rendering

use super::{attributes_string, named_attributes};
use crate::element::Element;
use dojo_view::{HtmlEscaper, ViewRenderer};

/// Renders an uploader file list as an empty `<div>` the widget fills in
#[derive(Debug, Clone, Default)]
pub struct DijitFormUploaderFileList {
    escaper: HtmlEscaper,
}

impl DijitFormUploaderFileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_view<V: ViewRenderer + ?Sized>(view: &V) -> Self {
        Self {
            escaper: HtmlEscaper::new(view.encoding()),
        }
    }

    pub fn render(&self, element: &Element) -> String {
        let attributes = named_attributes(element.name(), element.attributes());
        format!("<div {}></div>", attributes_string(&attributes, &self.escaper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_file_list() {
        let element = Element::uploader_file_list("files");

        assert_eq!(
            DijitFormUploaderFileList::new().render(&element),
            "<div type=\"uploaderFileList\" data-dojo-type=\"dojox/form/uploader/FileList\" name=\"files\"></div>"
        );
    }
}
