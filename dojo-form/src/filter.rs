//! Upload input filtering

use indexmap::IndexMap;

/// Unwraps uploader input posted as `fieldset_name => files`
#[derive(Debug, Clone, Copy, Default)]
pub struct UploaderFilter;

impl UploaderFilter {
    pub fn new() -> Self {
        Self
    }

    /// The files of the last fieldset, or `None` when nothing was posted
    pub fn filter<T>(&self, mut files: IndexMap<String, T>) -> Option<T> {
        files.pop().map(|(_, value)| value)
    }
}
