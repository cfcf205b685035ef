//! Dojo toolkit integration for server-rendered views
//!
//! This crate accumulates everything a page needs to bootstrap the Dojo
//! toolkit while the page is being built, then renders it as one block of
//! HTML for the document head.
//!
//! ## Features
//!
//! - 📦 Module requires and module path registration
//! - 🌐 CDN or local Dojo builds, plus custom layers
//! - 🎨 Theme stylesheets by module name (`dijit.themes.claro`)
//! - ⚙️ `dojoConfig` options, loadable from JSON or TOML files
//! - 🧩 Programmatic dijits with raw JavaScript parameters
//! - 📝 onLoad and javascript capture blocks
//! - 🔒 XHTML-aware script guards and HTML escaping
//!
//! ## Example
//!
//! ```
//! use dojo_view::{DojoHelper, PageView, RenderSettings};
//!
//! # fn example() -> dojo_view::Result<()> {
//! let mut helper = DojoHelper::new(PageView::new(), RenderSettings::default());
//!
//! helper
//!     .container_mut()
//!     .set_cdn_version("1.17.3")
//!     .add_stylesheet_module("dijit.themes.claro")?
//!     .add_on_load("function() { app.start(); }");
//! helper.container_mut().require_module("app.main")?;
//!
//! let head = helper.render();
//! assert!(head.contains("dojo.require(\"app.main\");"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Rendered blocks
//!
//! Output consists of five blocks joined by newlines; empty ones render as
//! empty strings:
//!
//! 1. `<style>` with `@import` rules for stylesheets
//! 2. `<script>` declaring `var dojoConfig`
//! 3. `<script src>` loading dojo itself
//! 4. One `<script src>` per layer
//! 5. `<script>` with module paths, requires, onLoad actions and javascript

pub mod capture;
pub mod cdn;
pub mod container;
pub mod error;
pub mod escape;
pub mod helper;
pub mod json;
pub mod options;
pub mod settings;
pub mod view;

pub use capture::{Capture, CaptureKind};
pub use cdn::{
    CDN_BASE_AOL, CDN_BASE_GOOGLE, CDN_DOJO_PATH_AOL, CDN_DOJO_PATH_GOOGLE, CdnProvider,
    DEFAULT_CDN_VERSION, DEFAULT_MODULES,
};
pub use container::Container;
pub use error::{DojoError, Result};
pub use escape::{HtmlEscaper, escape_html};
pub use helper::DojoHelper;
pub use json::{Dijit, DijitParams, JsValue};
pub use options::{ContainerOptions, FileFormat, OneOrMany};
pub use settings::{DijitStyle, PROGRAMMATIC_NOSCRIPT, PROGRAMMATIC_SCRIPT, RenderSettings};
pub use view::{Doctype, PageView, ViewRenderer};
