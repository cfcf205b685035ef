//! The view (page) that owns a container at render time

use crate::escape::DEFAULT_ENCODING;
use serde::{Deserialize, Serialize};

/// Document type of the page being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Doctype {
    /// XHTML 1.1
    Xhtml11,
    /// XHTML 1.0 Strict
    Xhtml1Strict,
    /// XHTML 1.0 Transitional
    Xhtml1Transitional,
    /// XHTML 1.0 Frameset
    Xhtml1Frameset,
    /// XHTML 1.0 + RDFa
    Xhtml1Rdfa,
    /// XHTML Basic 1.1
    XhtmlBasic1,
    /// XHTML5 (HTML5 served as XML)
    Xhtml5,
    /// HTML 4.01 Strict
    Html4Strict,
    /// HTML 4.01 Transitional
    Html4Loose,
    /// HTML 4.01 Frameset
    Html4Frameset,
    /// HTML5
    #[default]
    Html5,
}

impl Doctype {
    /// Does this doctype require XHTML markup?
    pub fn is_xhtml(&self) -> bool {
        matches!(
            self,
            Doctype::Xhtml11
                | Doctype::Xhtml1Strict
                | Doctype::Xhtml1Transitional
                | Doctype::Xhtml1Frameset
                | Doctype::Xhtml1Rdfa
                | Doctype::XhtmlBasic1
                | Doctype::Xhtml5
        )
    }

    /// Is this an HTML5 flavour?
    pub fn is_html5(&self) -> bool {
        matches!(self, Doctype::Html5 | Doctype::Xhtml5)
    }

    /// The `<!DOCTYPE ...>` declaration for this doctype
    pub fn declaration(&self) -> &'static str {
        match self {
            Doctype::Xhtml11 => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#
            }
            Doctype::Xhtml1Strict => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#
            }
            Doctype::Xhtml1Transitional => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#
            }
            Doctype::Xhtml1Frameset => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#
            }
            Doctype::Xhtml1Rdfa => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML+RDFa 1.0//EN" "http://www.w3.org/MarkUp/DTD/xhtml-rdfa-1.dtd">"#
            }
            Doctype::XhtmlBasic1 => {
                r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML Basic 1.1//EN" "http://www.w3.org/TR/xhtml-basic/xhtml-basic11.dtd">"#
            }
            Doctype::Html4Strict => {
                r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#
            }
            Doctype::Html4Loose => {
                r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#
            }
            Doctype::Html4Frameset => {
                r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#
            }
            Doctype::Html5 | Doctype::Xhtml5 => "<!DOCTYPE html>",
        }
    }
}

/// The page a container renders into.
///
/// The container only asks two things of it: whether markup must be XHTML,
/// and which character encoding the page uses.
pub trait ViewRenderer {
    /// Doctype of the page
    fn doctype(&self) -> Doctype;

    /// Is the page rendered as XHTML?
    fn is_xhtml(&self) -> bool {
        self.doctype().is_xhtml()
    }

    /// Character encoding of the page
    fn encoding(&self) -> &str {
        DEFAULT_ENCODING
    }
}

impl<T: ViewRenderer + ?Sized> ViewRenderer for &T {
    fn doctype(&self) -> Doctype {
        (**self).doctype()
    }

    fn is_xhtml(&self) -> bool {
        (**self).is_xhtml()
    }

    fn encoding(&self) -> &str {
        (**self).encoding()
    }
}

/// Plain view description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Doctype of the page
    pub doctype: Doctype,
    /// Character encoding of the page
    pub encoding: String,
}

impl PageView {
    /// Create an HTML5, UTF-8 view
    pub fn new() -> Self {
        Self {
            doctype: Doctype::default(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }

    /// Set the doctype
    pub fn with_doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    /// Set the character encoding
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for PageView {
    fn doctype(&self) -> Doctype {
        self.doctype
    }

    fn encoding(&self) -> &str {
        &self.encoding
    }
}
