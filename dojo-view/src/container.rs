//! The Dojo bootstrap container
//!
//! A [`Container`] accumulates everything a page needs to bootstrap Dojo
//! (module requires, module paths, layers, stylesheets, `dojoConfig`,
//! programmatic dijits, onLoad callbacks and free-form script) while the page
//! is being built, and renders it into one block of markup at the end.
//!
//! A container is scoped to a single page render. It is neither `Send` nor
//! `Sync` and must not be shared between requests.

use crate::capture::{Capture, CaptureKind, CaptureLock};
use crate::cdn::{CDN_BASE_GOOGLE, CDN_DOJO_PATH_GOOGLE, DEFAULT_CDN_VERSION, DEFAULT_MODULES};
use crate::escape::HtmlEscaper;
use crate::json::{self, Dijit, DijitParams};
use crate::options::{ContainerOptions, OneOrMany};
use crate::settings::RenderSettings;
use crate::view::ViewRenderer;
use crate::{DojoError, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

static MODULE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9._-]+$").unwrap());

static STYLESHEET_MODULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+\.[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$").unwrap()
});

static CDN_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9]\.[0-9]+(\.[0-9]+)?$").unwrap());

static DOJO_BOOTSTRAP_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[/\\]dojo[/\\]dojo\.js[^/\\]*$").unwrap());

/// Global variable the dijit loader reads programmatic dijits from
pub const DIJITS_VARIABLE: &str = "auroraDijits";

/// Module required by the dijit loader
pub const PARSER_MODULE: &str = "dojo.parser";

/// Callback that instantiates programmatic dijits once the DOM is ready
pub const DIJIT_LOADER_CALLBACK: &str = "function() {
    arrayUtil.forEach(auroraDijits, function(info) {
        var n = dom.byId(info.id);
        if (null != n) {
            dom.attr(n, dojo.mixin({ id: info.id }, info.params));
        }
    });
    parser.parse();
}";

/// Accumulated Dojo configuration for one page
#[derive(Debug)]
pub struct Container {
    settings: RenderSettings,
    enabled: bool,
    cdn_base: String,
    cdn_version: String,
    cdn_dojo_path: String,
    local_path: Option<String>,
    modules: Vec<String>,
    module_paths: IndexMap<String, String>,
    layers: Vec<String>,
    stylesheet_modules: Vec<String>,
    stylesheets: Vec<String>,
    register_dojo_stylesheet: bool,
    dojo_config: Map<String, Value>,
    dijits: IndexMap<String, Dijit>,
    javascript: Vec<String>,
    on_load_actions: Vec<String>,
    dojo_on_load_actions: Vec<String>,
    capture_lock: CaptureLock,
    dijit_loader_registered: bool,
}

impl Container {
    /// Create a disabled container with programmatic dijits
    pub fn new() -> Self {
        Self::with_settings(RenderSettings::default())
    }

    /// Create a disabled container with the given render settings
    pub fn with_settings(settings: RenderSettings) -> Self {
        Self {
            settings,
            enabled: false,
            cdn_base: CDN_BASE_GOOGLE.to_string(),
            cdn_version: DEFAULT_CDN_VERSION.to_string(),
            cdn_dojo_path: CDN_DOJO_PATH_GOOGLE.to_string(),
            local_path: None,
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            module_paths: IndexMap::new(),
            layers: Vec::new(),
            stylesheet_modules: Vec::new(),
            stylesheets: Vec::new(),
            register_dojo_stylesheet: false,
            dojo_config: Map::new(),
            dijits: IndexMap::new(),
            javascript: Vec::new(),
            on_load_actions: Vec::new(),
            dojo_on_load_actions: Vec::new(),
            capture_lock: CaptureLock::default(),
            dijit_loader_registered: false,
        }
    }

    /// Render settings this container was created with
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    // ------------------------------------------------------------------
    // Enable / disable
    // ------------------------------------------------------------------

    pub fn enable(&mut self) -> &mut Self {
        debug!("Enabling Dojo container");
        self.enabled = true;
        self
    }

    pub fn disable(&mut self) -> &mut Self {
        debug!("Disabling Dojo container");
        self.enabled = false;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply bulk options through the regular mutators
    pub fn set_options(&mut self, options: ContainerOptions) -> Result<&mut Self> {
        debug!("Applying Dojo container options");

        if let Some(modules) = options.require_modules {
            self.require_modules(modules.into_vec())?;
        }
        if let Some(paths) = options.module_paths {
            for (module, path) in paths {
                self.register_module_path(module, path);
            }
        }
        if let Some(layers) = options.layers {
            for layer in layers.into_vec() {
                self.add_layer(layer);
            }
        }
        if let Some(base) = options.cdn_base {
            self.set_cdn_base(base);
        }
        if let Some(version) = options.cdn_version {
            self.set_cdn_version(&version);
        }
        if let Some(path) = options.cdn_dojo_path {
            self.set_cdn_dojo_path(path);
        }
        if let Some(path) = options.local_path {
            self.set_local_path(path);
        }
        if let Some(config) = options.dojo_config {
            self.set_dojo_config(config);
        }
        if let Some(modules) = options.stylesheet_modules {
            for module in modules.into_vec() {
                self.add_stylesheet_module(&module)?;
            }
        }
        if let Some(stylesheets) = options.stylesheets.map(OneOrMany::into_vec) {
            for stylesheet in stylesheets {
                self.add_stylesheet(stylesheet);
            }
        }
        if let Some(flag) = options.register_dojo_stylesheet {
            self.register_dojo_stylesheet(flag);
        }
        match options.enable {
            Some(true) => {
                self.enable();
            }
            Some(false) => {
                self.disable();
            }
            None => {}
        }

        Ok(self)
    }

    // ------------------------------------------------------------------
    // Modules
    // ------------------------------------------------------------------

    /// Require a single module.
    ///
    /// Module names must start with a letter and contain only letters,
    /// digits, `.`, `_` and `-`. Requiring a module twice is a no-op.
    pub fn require_module(&mut self, module: &str) -> Result<&mut Self> {
        self.require_modules([module])
    }

    /// Require several modules.
    ///
    /// All names are validated before any is added, so a failure leaves the
    /// module list untouched.
    pub fn require_modules<I, S>(&mut self, modules: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let modules: Vec<S> = modules.into_iter().collect();
        let names: Vec<&str> = modules.iter().map(AsRef::as_ref).collect();
        if let Some(bad) = names.iter().find(|name| !MODULE_NAME.is_match(name)) {
            return Err(DojoError::validation("module name", *bad));
        }

        for name in names {
            self.push_module(name);
        }
        Ok(self)
    }

    fn push_module(&mut self, module: &str) {
        if !self.modules.iter().any(|m| m == module) {
            trace!(module, "Requiring Dojo module");
            self.modules.push(module.to_string());
        }
    }

    /// Modules to require, in load order
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Register a module path; the first registration for a module wins
    pub fn register_module_path(
        &mut self,
        module: impl Into<String>,
        path: impl Into<String>,
    ) -> &mut Self {
        self.module_paths.entry(module.into()).or_insert_with(|| path.into());
        self
    }

    pub fn module_paths(&self) -> &IndexMap<String, String> {
        &self.module_paths
    }

    // ------------------------------------------------------------------
    // Layers
    // ------------------------------------------------------------------

    /// Add a layer (custom build) path
    pub fn add_layer(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        if !self.layers.contains(&path) {
            self.layers.push(path);
        }
        self
    }

    pub fn remove_layer(&mut self, path: &str) -> &mut Self {
        self.layers.retain(|layer| layer != path);
        self
    }

    pub fn clear_layers(&mut self) -> &mut Self {
        self.layers.clear();
        self
    }

    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    // ------------------------------------------------------------------
    // CDN and local path
    // ------------------------------------------------------------------

    pub fn set_cdn_base(&mut self, url: impl Into<String>) -> &mut Self {
        self.cdn_base = url.into();
        self
    }

    pub fn cdn_base(&self) -> &str {
        &self.cdn_base
    }

    /// Use the CDN with the given version.
    ///
    /// Always enables the container. A version that does not look like
    /// `major.minor[.patch]` is ignored and the previous version is kept.
    pub fn set_cdn_version(&mut self, version: &str) -> &mut Self {
        self.enable();
        if CDN_VERSION.is_match(version) {
            self.cdn_version = version.to_string();
        } else {
            warn!(
                version,
                kept = %self.cdn_version,
                "Ignoring malformed Dojo CDN version"
            );
        }
        self
    }

    pub fn cdn_version(&self) -> &str {
        &self.cdn_version
    }

    /// Set the path to dojo relative to CDN base + version
    pub fn set_cdn_dojo_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.cdn_dojo_path = path.into();
        self
    }

    pub fn cdn_dojo_path(&self) -> &str {
        &self.cdn_dojo_path
    }

    /// Are we using the CDN?
    pub fn use_cdn(&self) -> bool {
        !self.use_local_path()
    }

    /// Load dojo from a local path instead of the CDN; enables the container
    pub fn set_local_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.enable();
        self.local_path = Some(path.into());
        self
    }

    pub fn local_path(&self) -> Option<&str> {
        self.local_path.as_deref()
    }

    /// Are we using a local path? True once any path, even `""`, was set.
    pub fn use_local_path(&self) -> bool {
        self.local_path.is_some()
    }

    // ------------------------------------------------------------------
    // dojoConfig
    // ------------------------------------------------------------------

    /// Replace the whole `dojoConfig`
    pub fn set_dojo_config(&mut self, config: Map<String, Value>) -> &mut Self {
        self.dojo_config = config;
        self
    }

    pub fn set_dojo_config_option(
        &mut self,
        option: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.dojo_config.insert(option.into(), value.into());
        self
    }

    pub fn dojo_config(&self) -> &Map<String, Value> {
        &self.dojo_config
    }

    pub fn dojo_config_option(&self, option: &str) -> Option<&Value> {
        self.dojo_config.get(option)
    }

    // ------------------------------------------------------------------
    // Stylesheets
    // ------------------------------------------------------------------

    /// Add a stylesheet by module name, e.g. `dijit.themes.claro`
    pub fn add_stylesheet_module(&mut self, module: &str) -> Result<&mut Self> {
        if !STYLESHEET_MODULE.is_match(module) {
            return Err(DojoError::validation("stylesheet module", module));
        }
        if !self.stylesheet_modules.iter().any(|m| m == module) {
            self.stylesheet_modules.push(module.to_string());
        }
        Ok(self)
    }

    pub fn stylesheet_modules(&self) -> &[String] {
        &self.stylesheet_modules
    }

    /// Add a stylesheet by path
    pub fn add_stylesheet(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        if !self.stylesheets.contains(&path) {
            self.stylesheets.push(path);
        }
        self
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Register (or unregister) the base `dojo.css` stylesheet
    pub fn register_dojo_stylesheet(&mut self, flag: bool) -> &mut Self {
        self.register_dojo_stylesheet = flag;
        self
    }

    pub fn is_dojo_stylesheet_registered(&self) -> bool {
        self.register_dojo_stylesheet
    }

    // ------------------------------------------------------------------
    // onLoad actions
    // ------------------------------------------------------------------

    /// Add a callback (function name or lambda) to run onLoad
    pub fn add_on_load(&mut self, callback: impl Into<String>) -> &mut Self {
        let callback = callback.into();
        if !self.on_load_actions.contains(&callback) {
            self.on_load_actions.push(callback);
        }
        self
    }

    /// Add a callback ahead of every other onLoad action
    pub fn prepend_on_load(&mut self, callback: impl Into<String>) -> &mut Self {
        let callback = callback.into();
        if !self.on_load_actions.contains(&callback) {
            self.on_load_actions.insert(0, callback);
        }
        self
    }

    pub fn on_load_actions(&self) -> &[String] {
        &self.on_load_actions
    }

    /// Start capturing an onLoad callback
    pub fn on_load_capture_start(&self) -> Result<Capture> {
        self.start_capture(CaptureKind::OnLoad)
    }

    /// Finish an onLoad capture and store it as one onLoad action
    pub fn on_load_capture_end(&mut self, capture: Capture) -> Result<&mut Self> {
        let data = self.finish_capture(capture, CaptureKind::OnLoad)?;
        Ok(self.add_on_load(data))
    }

    /// Add an onLoad action used by the dijit integration itself.
    ///
    /// These always run before the actions added with [`Container::add_on_load`]
    /// so that dijits exist before user code touches them.
    pub fn add_dojo_on_load(&mut self, callback: impl Into<String>) -> &mut Self {
        let callback = callback.into();
        if !self.dojo_on_load_actions.contains(&callback) {
            self.dojo_on_load_actions.push(callback);
        }
        self
    }

    pub fn dojo_on_load_actions(&self) -> &[String] {
        &self.dojo_on_load_actions
    }

    // ------------------------------------------------------------------
    // Programmatic dijits
    // ------------------------------------------------------------------

    /// Add a programmatic dijit; fails if the id is already registered
    pub fn add_dijit(&mut self, id: impl Into<String>, params: DijitParams) -> Result<&mut Self> {
        let id = id.into();
        if self.dijits.contains_key(&id) {
            return Err(DojoError::DuplicateKey(id));
        }
        trace!(id = %id, "Registering programmatic dijit");
        self.dijits.insert(id.clone(), Dijit::new(id, params));
        Ok(self)
    }

    /// Set a programmatic dijit, replacing any dijit with the same id
    pub fn set_dijit(&mut self, id: impl Into<String>, params: DijitParams) -> &mut Self {
        let id = id.into();
        self.remove_dijit(&id);
        self.dijits.insert(id.clone(), Dijit::new(id, params));
        self
    }

    /// Add several dijits; stops at the first duplicate id
    pub fn add_dijits<I, K>(&mut self, dijits: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, DijitParams)>,
        K: Into<String>,
    {
        for (id, params) in dijits {
            self.add_dijit(id, params)?;
        }
        Ok(self)
    }

    /// Replace all dijits
    pub fn set_dijits<I, K>(&mut self, dijits: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, DijitParams)>,
        K: Into<String>,
    {
        self.clear_dijits();
        for (id, params) in dijits {
            self.set_dijit(id, params);
        }
        self
    }

    pub fn has_dijit(&self, id: &str) -> bool {
        self.dijits.contains_key(id)
    }

    /// Parameters of a registered dijit
    pub fn dijit(&self, id: &str) -> Option<&DijitParams> {
        self.dijits.get(id).map(|dijit| &dijit.params)
    }

    /// All dijits, in registration order
    pub fn dijits(&self) -> impl ExactSizeIterator<Item = &Dijit> + '_ {
        self.dijits.values()
    }

    pub fn remove_dijit(&mut self, id: &str) -> &mut Self {
        self.dijits.shift_remove(id);
        self
    }

    pub fn clear_dijits(&mut self) -> &mut Self {
        self.dijits.clear();
        self
    }

    /// Dijits as a JSON array, raw expressions left unquoted
    pub fn dijits_to_json(&self) -> String {
        json::encode_dijits(self.dijits.values())
    }

    /// Wire up the loader that instantiates programmatic dijits.
    ///
    /// Runs at most once per container.
    pub fn register_dijit_loader(&mut self) -> &mut Self {
        if self.dijit_loader_registered {
            return self;
        }

        debug!(dijits = self.dijits.len(), "Registering dijit loader");
        self.push_module(PARSER_MODULE);
        self.add_dojo_on_load(DIJIT_LOADER_CALLBACK);
        let declaration = format!("let {} = {};", DIJITS_VARIABLE, self.dijits_to_json());
        self.add_javascript(&declaration);
        self.dijit_loader_registered = true;
        self
    }

    pub fn is_dijit_loader_registered(&self) -> bool {
        self.dijit_loader_registered
    }

    // ------------------------------------------------------------------
    // Arbitrary javascript
    // ------------------------------------------------------------------

    /// Add a javascript statement to the dojo script block.
    ///
    /// The statement is trimmed and terminated with `;` unless it already
    /// ends in `;` or `}`. Duplicate statements are dropped.
    pub fn add_javascript(&mut self, js: &str) -> &mut Self {
        let mut js = js.trim().to_string();
        if !js.ends_with(';') && !js.ends_with('}') {
            js.push(';');
        }

        if !self.javascript.contains(&js) {
            self.javascript.push(js);
        }
        self
    }

    pub fn javascript(&self) -> &[String] {
        &self.javascript
    }

    pub fn clear_javascript(&mut self) -> &mut Self {
        self.javascript.clear();
        self
    }

    /// Start capturing javascript for the dojo script block
    pub fn javascript_capture_start(&self) -> Result<Capture> {
        self.start_capture(CaptureKind::Javascript)
    }

    /// Finish a javascript capture and store it as one statement
    pub fn javascript_capture_end(&mut self, capture: Capture) -> Result<&mut Self> {
        let data = self.finish_capture(capture, CaptureKind::Javascript)?;
        Ok(self.add_javascript(&data))
    }

    /// Is a capture currently open?
    pub fn is_capturing(&self) -> bool {
        self.capture_lock.is_locked()
    }

    fn start_capture(&self, kind: CaptureKind) -> Result<Capture> {
        let capture = self
            .capture_lock
            .acquire(kind)
            .ok_or(DojoError::Reentrancy(kind.as_str()))?;
        debug!(kind = %kind, "Started capture");
        Ok(capture)
    }

    fn finish_capture(&self, capture: Capture, expected: CaptureKind) -> Result<String> {
        if !capture.belongs_to(&self.capture_lock) {
            return Err(DojoError::ForeignCapture(capture.kind().as_str()));
        }
        if capture.kind() != expected {
            return Err(DojoError::CaptureMismatch {
                expected: expected.as_str(),
                found: capture.kind().as_str(),
            });
        }
        debug!(kind = %expected, "Finished capture");
        Ok(capture.finish())
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the Dojo environment for the given view.
    ///
    /// Returns an empty string while the container is disabled. Otherwise the
    /// output is up to five blocks joined by newlines: stylesheets,
    /// `dojoConfig`, the dojo script tag, layers, and the extras script
    /// (module paths, requires, onLoad actions, javascript). Empty blocks are
    /// skipped and leave no separator behind.
    pub fn render(&mut self, view: &dyn ViewRenderer) -> String {
        if !self.enabled {
            return String::new();
        }

        let xhtml = view.is_xhtml();

        if self.settings.dijit_style.use_declarative()
            && self.dojo_config_option("parseOnLoad").is_none_or(Value::is_null)
        {
            self.set_dojo_config_option("parseOnLoad", true);
        }

        if !self.dijits.is_empty() {
            self.register_dijit_loader();
        }

        let escaper = HtmlEscaper::new(view.encoding());
        debug!(
            xhtml,
            cdn = self.use_cdn(),
            modules = self.modules.len(),
            layers = self.layers.len(),
            "Rendering Dojo container"
        );

        [
            self.render_stylesheets(),
            self.render_dojo_config(xhtml),
            self.render_dojo_script_tag(),
            self.render_layers(&escaper),
            self.render_extras(xhtml),
        ]
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Render and discard the container
    pub fn into_html(mut self, view: &dyn ViewRenderer) -> String {
        self.render(view)
    }

    /// Base URL for dojo resources (stylesheets)
    fn asset_base(&self) -> String {
        match &self.local_path {
            Some(path) => DOJO_BOOTSTRAP_FILE.replace(path, "").into_owned(),
            None => format!("{}{}", self.cdn_base, self.cdn_version),
        }
    }

    fn render_stylesheets(&self) -> String {
        let base = self.asset_base();

        let mut stylesheets: Vec<String> = self
            .stylesheet_modules
            .iter()
            .map(|module| {
                let theme = module.rsplit_once('.').map_or(module.as_str(), |(_, t)| t);
                format!("{}/{}/{}.css", base, module.replace('.', "/"), theme)
            })
            .collect();
        stylesheets.extend(self.stylesheets.iter().cloned());
        if self.register_dojo_stylesheet {
            stylesheets.push(format!("{}/dojo/resources/dojo.css", base));
        }

        if stylesheets.is_empty() {
            return String::new();
        }

        let mut style = String::from("<style>\n<!--\n");
        for stylesheet in &stylesheets {
            style.push_str(&format!("    @import \"{}\";\n", stylesheet));
        }
        style.push_str("-->\n</style>");
        style
    }

    fn render_dojo_config(&self, xhtml: bool) -> String {
        if self.dojo_config.is_empty() {
            return String::new();
        }

        let (open, close) = script_guards(xhtml);
        format!(
            "<script>\n{}\n    var dojoConfig = {};\n{}\n</script>",
            open,
            Value::Object(self.dojo_config.clone()),
            close
        )
    }

    fn render_dojo_script_tag(&self) -> String {
        let source = match &self.local_path {
            Some(path) => path.clone(),
            None => format!("{}{}{}", self.cdn_base, self.cdn_version, self.cdn_dojo_path),
        };
        format!("<script src=\"{}\"></script>", source)
    }

    fn render_layers(&self, escaper: &HtmlEscaper) -> String {
        self.layers
            .iter()
            .map(|path| format!("<script src=\"{}\"></script>", escaper.escape(path)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_extras(&self, xhtml: bool) -> String {
        let mut js: Vec<String> = self
            .module_paths
            .iter()
            .map(|(module, path)| format!("dojo.registerModulePath(\"{}\", \"{}\");", module, path))
            .collect();
        js.extend(
            self.modules
                .iter()
                .map(|module| format!("dojo.require(\"{}\");", module)),
        );

        // Dijit creation callbacks run first so dijits exist for user code
        let on_load: Vec<String> = self
            .dojo_on_load_actions
            .iter()
            .chain(&self.on_load_actions)
            .map(|callback| format!("dojo.addOnLoad({});", callback))
            .collect();

        let javascript = self.javascript.join("\n    ");

        let mut content = String::new();
        if !js.is_empty() {
            content.push_str(&js.join("\n    "));
            content.push('\n');
        }
        if !on_load.is_empty() {
            content.push_str(&on_load.join("\n    "));
            content.push('\n');
        }
        if !javascript.is_empty() {
            content.push_str(&javascript);
            content.push('\n');
        }

        if content.trim().is_empty() {
            return String::new();
        }

        let (open, close) = script_guards(xhtml);
        format!("<script>\n{}\n{}{}\n\n</script>", open, content, close)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Comment guards around inline script for the markup mode
fn script_guards(xhtml: bool) -> (&'static str, &'static str) {
    if xhtml {
        ("//<![CDATA[", "//]]>")
    } else {
        ("//<!--", "//-->")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::JsValue;
    use crate::settings::DijitStyle;
    use crate::view::{Doctype, PageView};
    use std::fmt::Write;

    fn params(pairs: &[(&str, &str)]) -> DijitParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), JsValue::from(*v)))
            .collect()
    }

    fn default_requires() -> String {
        DEFAULT_MODULES
            .iter()
            .map(|m| format!("dojo.require(\"{}\");", m))
            .collect::<Vec<_>>()
            .join("\n    ")
    }

    #[test]
    fn test_new_container_is_disabled() {
        let container = Container::new();

        assert!(!container.is_enabled());
        assert_eq!(container.cdn_base(), CDN_BASE_GOOGLE);
        assert_eq!(container.cdn_version(), "1.17.3");
        assert_eq!(container.cdn_dojo_path(), CDN_DOJO_PATH_GOOGLE);
        assert_eq!(container.modules().len(), DEFAULT_MODULES.len());
        assert!(container.use_cdn());
    }

    #[test]
    fn test_disabled_container_renders_nothing() {
        let mut container = Container::new();
        container.add_layer("/js/app.js").add_on_load("init");

        assert_eq!(container.render(&PageView::new()), "");
    }

    #[test]
    fn test_require_module_appends_after_defaults() {
        let mut container = Container::new();
        container.require_module("app.main").unwrap();
        container.require_module("app.main").unwrap();

        assert_eq!(container.modules().len(), DEFAULT_MODULES.len() + 1);
        assert_eq!(container.modules().last().map(String::as_str), Some("app.main"));
    }

    #[test]
    fn test_require_module_rejects_invalid_names() {
        let mut container = Container::new();

        for bad in ["9lives", "has space", "a", "dijit/form/Button", "x!"] {
            let err = container.require_module(bad).unwrap_err();
            assert!(err.is_validation(), "{bad} should be rejected");
            assert!(err.to_string().contains(bad));
        }
        assert_eq!(container.modules().len(), DEFAULT_MODULES.len());
    }

    #[test]
    fn test_require_modules_is_all_or_nothing() {
        let mut container = Container::new();
        let result = container.require_modules(["app.one", "bad name", "app.two"]);

        assert!(result.is_err());
        assert_eq!(container.modules().len(), DEFAULT_MODULES.len());
    }

    #[test]
    fn test_module_path_first_registration_wins() {
        let mut container = Container::new();
        container
            .register_module_path("custom", "../custom")
            .register_module_path("custom", "../other");

        assert_eq!(container.module_paths().len(), 1);
        assert_eq!(container.module_paths()["custom"], "../custom");
    }

    #[test]
    fn test_layers() {
        let mut container = Container::new();
        container
            .add_layer("/js/a.js")
            .add_layer("/js/b.js")
            .add_layer("/js/a.js");
        assert_eq!(container.layers(), ["/js/a.js", "/js/b.js"]);

        container.remove_layer("/js/a.js");
        assert_eq!(container.layers(), ["/js/b.js"]);

        container.remove_layer("/js/missing.js").clear_layers();
        assert!(container.layers().is_empty());
    }

    #[test]
    fn test_cdn_version_enables_even_when_rejected() {
        let mut container = Container::new();
        container.set_cdn_version("1.9");
        assert!(container.is_enabled());
        assert_eq!(container.cdn_version(), "1.9");

        container.disable();
        container.set_cdn_version("not-a-version");
        assert!(container.is_enabled());
        assert_eq!(container.cdn_version(), "1.9");

        container.set_cdn_version("1.17.3");
        assert_eq!(container.cdn_version(), "1.17.3");
    }

    #[test]
    fn test_local_path_wins_over_cdn() {
        let mut container = Container::new();
        assert!(!container.use_local_path());

        container.set_local_path("");
        assert!(container.is_enabled());
        assert!(container.use_local_path());
        assert!(!container.use_cdn());
        assert_eq!(container.local_path(), Some(""));
    }

    #[test]
    fn test_stylesheet_module_validation() {
        let mut container = Container::new();
        container.add_stylesheet_module("dijit.themes.claro").unwrap();
        container.add_stylesheet_module("dijit.themes.claro").unwrap();

        assert!(container.add_stylesheet_module("claro").unwrap_err().is_validation());
        assert!(container.add_stylesheet_module("dijit/themes").is_err());
        assert_eq!(container.stylesheet_modules(), ["dijit.themes.claro"]);
    }

    #[test]
    fn test_dojo_stylesheet_flag() {
        let mut container = Container::new();
        assert!(!container.is_dojo_stylesheet_registered());

        container.register_dojo_stylesheet(true);
        assert!(container.is_dojo_stylesheet_registered());
    }

    #[test]
    fn test_on_load_order_and_dedup() {
        let mut container = Container::new();
        container
            .add_on_load("second")
            .add_on_load("third")
            .prepend_on_load("first")
            .add_on_load("second")
            .prepend_on_load("third");

        assert_eq!(container.on_load_actions(), ["first", "second", "third"]);
    }

    #[test]
    fn test_add_javascript_normalizes() {
        let mut container = Container::new();
        container
            .add_javascript("  var a = 1  ")
            .add_javascript("var a = 1;")
            .add_javascript("function f() {}")
            .add_javascript("var b = 2;");

        assert_eq!(container.javascript(), ["var a = 1;", "function f() {}", "var b = 2;"]);

        container.clear_javascript();
        assert!(container.javascript().is_empty());
    }

    #[test]
    fn test_dijit_registration() {
        let mut container = Container::new();
        container.add_dijit("a", params(&[("label", "one")])).unwrap();

        let err = container.add_dijit("a", params(&[("label", "two")])).unwrap_err();
        assert!(err.is_duplicate_key());

        container.set_dijit("a", params(&[("label", "two")]));
        assert_eq!(container.dijits().len(), 1);
        assert_eq!(
            container.dijit("a").and_then(|p| p.get("label")),
            Some(&JsValue::from("two"))
        );

        container.remove_dijit("a");
        assert!(!container.has_dijit("a"));
        assert!(container.dijit("a").is_none());
    }

    #[test]
    fn test_set_dijits_replaces_all() {
        let mut container = Container::new();
        container
            .add_dijits([("a", params(&[])), ("b", params(&[]))])
            .unwrap();
        assert!(container.add_dijits([("c", params(&[])), ("a", params(&[]))]).is_err());

        container.set_dijits([("z", params(&[]))]);
        let ids: Vec<&str> = container.dijits().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["z"]);
    }

    #[test]
    fn test_nested_captures_fail() {
        let container = Container::new();
        let _first = container.javascript_capture_start().unwrap();

        assert!(container.javascript_capture_start().unwrap_err().is_reentrancy());
        assert!(container.on_load_capture_start().unwrap_err().is_reentrancy());
        assert!(container.is_capturing());
    }

    #[test]
    fn test_capture_end_stores_content() {
        let mut container = Container::new();

        let mut capture = container.on_load_capture_start().unwrap();
        write!(capture, "function() {{ app.start(); }}").unwrap();
        container.on_load_capture_end(capture).unwrap();

        let mut capture = container.javascript_capture_start().unwrap();
        capture.push_str("  var ready = true\n");
        container.javascript_capture_end(capture).unwrap();

        assert!(!container.is_capturing());
        assert_eq!(container.on_load_actions(), ["function() { app.start(); }"]);
        assert_eq!(container.javascript(), ["var ready = true;"]);
    }

    #[test]
    fn test_capture_mismatch_releases_lock() {
        let mut container = Container::new();
        let capture = container.on_load_capture_start().unwrap();

        let err = container.javascript_capture_end(capture).unwrap_err();
        assert!(matches!(err, DojoError::CaptureMismatch { .. }));
        assert!(!container.is_capturing());
        assert!(container.javascript().is_empty());
    }

    #[test]
    fn test_capture_from_other_container_is_rejected() {
        let mut owner = Container::new();
        let mut other = Container::new();

        let mut capture = owner.javascript_capture_start().unwrap();
        capture.push_str("var fromOwner = 1");

        let err = other.javascript_capture_end(capture).unwrap_err();
        assert!(matches!(err, DojoError::ForeignCapture("javascript")));
        assert!(other.javascript().is_empty());
        assert!(owner.javascript().is_empty());
        assert!(!owner.is_capturing());
        assert!(!other.is_capturing());
    }

    #[test]
    fn test_render_skips_empty_blocks() {
        let mut container = Container::new();
        container.enable().add_stylesheet("/css/app.css");

        let html = container.render(&PageView::new());
        assert!(!html.starts_with('\n'));
        assert!(!html.contains("\n\n<script"));
        assert!(html.contains("</style>\n<script src="));
        assert!(html.contains("dojo.xd.js\"></script>\n<script>\n//<!--"));
    }

    #[test]
    fn test_dijit_loader_registers_once() {
        let mut container = Container::new();
        container.add_dijit("save", params(&[("label", "Save")])).unwrap();

        container.register_dijit_loader().register_dijit_loader();

        assert!(container.is_dijit_loader_registered());
        assert_eq!(container.dojo_on_load_actions(), [DIJIT_LOADER_CALLBACK]);
        assert!(container.modules().iter().any(|m| m == PARSER_MODULE));
        assert_eq!(
            container.javascript(),
            [r#"let auroraDijits = [{"id":"save","params":{"label":"Save"}}];"#]
        );
    }

    #[test]
    fn test_render_default_cdn() {
        let mut container = Container::new();
        container.enable().set_cdn_version("1.17.3");

        let expected = format!(
            "<script src=\"{}1.17.3{}\"></script>\n<script>\n//<!--\n{}\n//-->\n\n</script>",
            CDN_BASE_GOOGLE,
            CDN_DOJO_PATH_GOOGLE,
            default_requires()
        );
        assert_eq!(container.render(&PageView::new()), expected);
    }

    #[test]
    fn test_render_xhtml_uses_cdata() {
        let mut container = Container::new();
        container.enable().set_dojo_config_option("isDebug", true);

        let view = PageView::new().with_doctype(Doctype::Xhtml1Strict);
        let html = container.render(&view);

        assert!(html.contains(
            "<script>\n//<![CDATA[\n    var dojoConfig = {\"isDebug\":true};\n//]]>\n</script>"
        ));
        assert!(html.ends_with("//]]>\n\n</script>"));
    }

    #[test]
    fn test_render_stylesheets_from_cdn() {
        let mut container = Container::new();
        container.enable();
        container.add_stylesheet_module("foo.bar").unwrap();
        container.add_stylesheet_module("foo.baz.theme").unwrap();

        let base = format!("{}{}", CDN_BASE_GOOGLE, DEFAULT_CDN_VERSION);
        let html = container.render(&PageView::new());
        let expected = format!(
            "<style>\n<!--\n    @import \"{base}/foo/bar/bar.css\";\n    @import \"{base}/foo/baz/theme/theme.css\";\n-->\n</style>\n"
        );
        assert!(html.starts_with(&expected), "{html}");
    }

    #[test]
    fn test_render_local_path_stylesheets() {
        let mut container = Container::new();
        container
            .set_local_path("/js/dojo/dojo.js")
            .add_stylesheet("/css/site.css")
            .register_dojo_stylesheet(true);
        container.add_stylesheet_module("dijit.themes.claro").unwrap();

        let html = container.render(&PageView::new());

        assert!(html.contains("    @import \"/js/dijit/themes/claro/claro.css\";\n"));
        assert!(html.contains("    @import \"/css/site.css\";\n"));
        assert!(html.contains("    @import \"/js/dojo/resources/dojo.css\";\n"));
        assert!(html.contains("<script src=\"/js/dojo/dojo.js\"></script>"));
    }

    #[test]
    fn test_render_layers_are_escaped() {
        let mut container = Container::new();
        container.enable().add_layer("/js/a.js?v=1&b=2").add_layer("/js/b.js");

        let html = container.render(&PageView::new());
        assert!(html.contains(
            "<script src=\"/js/a.js?v=1&amp;b=2\"></script>\n<script src=\"/js/b.js\"></script>"
        ));
    }

    #[test]
    fn test_render_extras_order() {
        let mut container = Container::new();
        container
            .enable()
            .register_module_path("custom", "../custom")
            .add_on_load("userInit")
            .add_dojo_on_load("dijitInit")
            .add_javascript("var x = 1");

        let html = container.render(&PageView::new());
        let path = html.find("dojo.registerModulePath(\"custom\", \"../custom\");").unwrap();
        let require = html.find("dojo.require(\"aurora/Aurora\");").unwrap();
        let dijit_init = html.find("dojo.addOnLoad(dijitInit);").unwrap();
        let user_init = html.find("dojo.addOnLoad(userInit);").unwrap();
        let js = html.find("var x = 1;").unwrap();

        assert!(path < require);
        assert!(require < dijit_init);
        assert!(dijit_init < user_init);
        assert!(user_init < js);
    }

    #[test]
    fn test_render_registers_dijit_loader() {
        let mut container = Container::new();
        container.enable();
        let mut button = DijitParams::new();
        button.insert("onClick".to_string(), JsValue::expr("function() { save(); }"));
        container.add_dijit("save", button).unwrap();

        let html = container.render(&PageView::new());

        assert!(html.contains("dojo.require(\"dojo.parser\");"));
        assert!(html.contains("dojo.addOnLoad(function() {\n    arrayUtil.forEach(auroraDijits"));
        assert!(html.contains(
            r#"let auroraDijits = [{"id":"save","params":{"onClick":function() { save(); }}}];"#
        ));

        // A second render must not register the loader again
        let again = container.render(&PageView::new());
        assert_eq!(html, again);
    }

    #[test]
    fn test_declarative_defaults_parse_on_load() {
        let mut container = Container::with_settings(RenderSettings::declarative());
        container.enable();
        container.render(&PageView::new());
        assert_eq!(container.dojo_config_option("parseOnLoad"), Some(&Value::Bool(true)));

        let mut explicit = Container::with_settings(RenderSettings::declarative());
        explicit.enable().set_dojo_config_option("parseOnLoad", false);
        explicit.render(&PageView::new());
        assert_eq!(explicit.dojo_config_option("parseOnLoad"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_programmatic_leaves_config_alone() {
        let mut container =
            Container::with_settings(RenderSettings::new().with_dijit_style(DijitStyle::Programmatic));
        container.enable();
        let html = container.render(&PageView::new());

        assert!(container.dojo_config().is_empty());
        assert!(!html.contains("dojoConfig"));
    }

    #[test]
    fn test_set_options() {
        let mut container = Container::new();
        let options = ContainerOptions::new()
            .with_require_modules(["app.main"])
            .with_module_path("app", "../app")
            .with_cdn_version("1.10")
            .with_stylesheet_module("dijit.themes.tundra")
            .with_dojo_config_option("async", true);

        container.set_options(options).unwrap();

        assert!(container.is_enabled());
        assert_eq!(container.cdn_version(), "1.10");
        assert_eq!(container.modules().last().map(String::as_str), Some("app.main"));
        assert_eq!(container.module_paths()["app"], "../app");
        assert_eq!(container.stylesheet_modules(), ["dijit.themes.tundra"]);
        assert_eq!(container.dojo_config_option("async"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_set_options_validates() {
        let mut container = Container::new();
        let options = ContainerOptions::new().with_stylesheet_module("nodots");

        assert!(container.set_options(options).unwrap_err().is_validation());
    }

    #[test]
    fn test_set_options_can_disable() {
        let mut container = Container::new();
        container
            .set_options(ContainerOptions::new().with_local_path("/dojo.js").with_enable(false))
            .unwrap();

        assert!(container.use_local_path());
        assert!(!container.is_enabled());
    }
}
