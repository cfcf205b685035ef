//! Rendering settings shared by a container and the dijit helpers

use serde::{Deserialize, Serialize};

/// Script flag selecting programmatic dijits with generated script
pub const PROGRAMMATIC_SCRIPT: i32 = 1;

/// Script flag selecting programmatic dijits without generated script
pub const PROGRAMMATIC_NOSCRIPT: i32 = -1;

/// How dijits are created on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DijitStyle {
    /// Dijits are declared in script and created by the dijit loader
    #[default]
    Programmatic,
    /// Dijits are declared programmatically but helpers emit no script
    ProgrammaticNoScript,
    /// Dijits are declared in markup and created by the parser
    Declarative,
}

impl DijitStyle {
    /// Map a programmatic style flag.
    ///
    /// [`PROGRAMMATIC_NOSCRIPT`] selects the no-script style; any other value
    /// falls back to [`DijitStyle::Programmatic`].
    pub fn from_programmatic_flag(flag: i32) -> Self {
        if flag == PROGRAMMATIC_NOSCRIPT {
            DijitStyle::ProgrammaticNoScript
        } else {
            DijitStyle::Programmatic
        }
    }

    /// Should dijits be created declaratively?
    pub fn use_declarative(&self) -> bool {
        matches!(self, DijitStyle::Declarative)
    }

    /// Should dijits be created programmatically?
    pub fn use_programmatic(&self) -> bool {
        !self.use_declarative()
    }

    /// Should dijits be created programmatically but without scripts?
    pub fn use_programmatic_noscript(&self) -> bool {
        matches!(self, DijitStyle::ProgrammaticNoScript)
    }
}

/// Rendering settings passed to a [`Container`](crate::Container) at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    /// How dijits are created
    pub dijit_style: DijitStyle,
}

impl RenderSettings {
    /// Create settings with the default (programmatic) style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create dijits declaratively
    pub fn declarative() -> Self {
        Self {
            dijit_style: DijitStyle::Declarative,
        }
    }

    /// Create dijits programmatically with the given style flag
    pub fn programmatic(flag: i32) -> Self {
        Self {
            dijit_style: DijitStyle::from_programmatic_flag(flag),
        }
    }

    /// Set the dijit style
    pub fn with_dijit_style(mut self, style: DijitStyle) -> Self {
        self.dijit_style = style;
        self
    }
}
