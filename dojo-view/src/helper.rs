//! View helper owning a container and its view

use crate::container::Container;
use crate::settings::RenderSettings;
use crate::view::ViewRenderer;

/// Entry point used by templates.
///
/// Holds the page's [`Container`] and the view it renders into. Container
/// operations are reached through [`DojoHelper::container_mut`].
#[derive(Debug)]
pub struct DojoHelper<V: ViewRenderer> {
    container: Container,
    view: V,
}

impl<V: ViewRenderer> DojoHelper<V> {
    /// Create a helper with a fresh container using the given settings
    pub fn new(view: V, settings: RenderSettings) -> Self {
        Self::with_container(view, Container::with_settings(settings))
    }

    /// Wrap an existing container
    pub fn with_container(view: V, container: Container) -> Self {
        Self { container, view }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn settings(&self) -> RenderSettings {
        self.container.settings()
    }

    /// Render the container for the owned view
    pub fn render(&mut self) -> String {
        self.container.render(&self.view)
    }

    /// Give up the view and return the container
    pub fn into_container(self) -> Container {
        self.container
    }
}

impl<V: ViewRenderer> From<DojoHelper<V>> for String {
    fn from(mut helper: DojoHelper<V>) -> Self {
        helper.render()
    }
}
