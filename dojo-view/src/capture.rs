//! Scoped capture buffers
//!
//! A [`Capture`] collects markup or script written while it is alive and hands
//! it back to the container when the capture ends. Only one capture per
//! container may be open at a time; the capture holds the container's lock and
//! releases it when dropped, so an early return or a panic can never leave the
//! container locked.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// What a capture will be stored as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// Stored as one onLoad action
    OnLoad,
    /// Stored as one javascript statement
    Javascript,
}

impl CaptureKind {
    /// Name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureKind::OnLoad => "onLoad",
            CaptureKind::Javascript => "javascript",
        }
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-holder lock shared between a container and its open capture
#[derive(Debug, Clone, Default)]
pub(crate) struct CaptureLock(Rc<Cell<bool>>);

impl CaptureLock {
    pub(crate) fn is_locked(&self) -> bool {
        self.0.get()
    }

    /// Take the lock; `None` when it is already held
    pub(crate) fn acquire(&self, kind: CaptureKind) -> Option<Capture> {
        if self.0.replace(true) {
            return None;
        }
        Some(Capture {
            kind,
            buffer: String::new(),
            lock: self.clone(),
        })
    }

    fn release(&self) {
        self.0.set(false);
    }
}

/// An open capture session
#[derive(Debug)]
pub struct Capture {
    kind: CaptureKind,
    buffer: String,
    lock: CaptureLock,
}

impl Capture {
    /// What the captured text will become
    pub fn kind(&self) -> CaptureKind {
        self.kind
    }

    /// Append text to the capture
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Text captured so far
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Was this capture opened on `lock`?
    pub(crate) fn belongs_to(&self, lock: &CaptureLock) -> bool {
        Rc::ptr_eq(&self.lock.0, &lock.0)
    }

    /// Release the lock and return the captured text
    pub(crate) fn finish(mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

impl fmt::Write for Capture {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        self.lock.release();
    }
}
