//! CDN locations and bootstrap defaults

/// Base path to the AOL CDN
pub const CDN_BASE_AOL: &str = "http://o.aolcdn.com/dojo/";

/// Path to dojo on the AOL CDN (following the version string)
pub const CDN_DOJO_PATH_AOL: &str = "/dojo/dojo.xd.js";

/// Base path to the Google CDN
pub const CDN_BASE_GOOGLE: &str = "http://ajax.googleapis.com/ajax/libs/dojo/";

/// Path to dojo on the Google CDN (following the version string)
pub const CDN_DOJO_PATH_GOOGLE: &str = "/dojo/dojo.xd.js";

/// Dojo version loaded from the CDN unless configured otherwise
pub const DEFAULT_CDN_VERSION: &str = "1.17.3";

/// Modules every page requires, in load order
pub const DEFAULT_MODULES: &[&str] = &[
    "aurora/Aurora",
    "dojo/dom",
    "dojo/query",
    "dojo/Nodelist",
    "dojo/html",
    "dojo/topic",
    "dojo/request",
    "dojo/request/notify",
    "dijit/registry",
    "dijit/Dialog",
    "dijit/layout/BorderContainer",
    "dijit/layout/TabContainer",
    "dijit/form/Button",
    "dojox/layout/ContentPane",
    "dijit/layout/StackContainer",
    "dijit/layout/StackController",
    "dojo/parser",
    "dojox/form/Manager",
    "dijit/ProgressBar",
    "dojo/_base/array",
    "dojo/domReady!",
];

/// Well-known CDN providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdnProvider {
    /// Google Hosted Libraries
    Google,
    /// AOL CDN
    Aol,
}

impl CdnProvider {
    /// Base URL (the version string follows)
    pub fn base(&self) -> &'static str {
        match self {
            CdnProvider::Google => CDN_BASE_GOOGLE,
            CdnProvider::Aol => CDN_BASE_AOL,
        }
    }

    /// Path to `dojo.js` after the version string
    pub fn dojo_path(&self) -> &'static str {
        match self {
            CdnProvider::Google => CDN_DOJO_PATH_GOOGLE,
            CdnProvider::Aol => CDN_DOJO_PATH_AOL,
        }
    }
}
