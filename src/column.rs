//! Register-window column — layout without content.
//!
//! The window column has two zones: register windows occupy a contiguous
//! prefix at the top, the user's file windows the suffix below. This module
//! owns the prefix. It decides where a register window goes, keeps the
//! prefix in most-recently-opened-first order, and tears windows down
//! without disturbing the suffix. It never reads or writes text — content
//! flows only through the sync layer.
//!
//! ```text
//! ┌──────────────┐ ← prefix: register windows, newest on top
//! │ register "c  │
//! │ register "b  │
//! │ register "a  │
//! ├──────────────┤ ← suffix: the user's file windows, untouched
//! │ main.rs      │
//! │ notes.txt    │
//! └──────────────┘
//! ```
//!
//! Every insertion goes to the top of the prefix. When one command opens
//! several registers (`view("abc")`), each lands on top in turn, so the
//! last-listed register ends up topmost: `[c, b, a, <files>]`. Re-opening
//! an already-open register repositions its existing window to the top
//! instead of creating a second one.
//!
//! The column does not own the host — every operation borrows it, keeping
//! this a plain data structure over window ids.

use crate::host::{Host, HostError, SurfaceId, WindowId};

/// One register window the column tracks: which window, showing which
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnEntry {
    /// The host's window id.
    pub window: WindowId,
    /// The surface shown in that window.
    pub surface: SurfaceId,
}

/// The register-window prefix of the column, topmost first.
#[derive(Debug, Default)]
pub struct PaneColumn {
    entries: Vec<ColumnEntry>,
}

impl PaneColumn {
    /// An empty column prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a window for `surface` at the top of the prefix.
    pub fn insert(
        &mut self,
        host: &mut impl Host,
        surface: SurfaceId,
        height: u16,
    ) -> Result<WindowId, HostError> {
        let window = host.open_window(surface, height, 0)?;
        self.entries.insert(0, ColumnEntry { window, surface });
        Ok(window)
    }

    /// Move the surface's existing window to the top of the prefix and give
    /// it `height`. A no-op for surfaces the column does not track.
    pub fn reposition(
        &mut self,
        host: &mut impl Host,
        surface: SurfaceId,
        height: u16,
    ) -> Result<(), HostError> {
        let Some(at) = self.entries.iter().position(|e| e.surface == surface) else {
            return Ok(());
        };
        let entry = self.entries.remove(at);
        self.entries.insert(0, entry);
        host.move_window(entry.window, 0)?;
        host.resize_window(entry.window, height)?;
        Ok(())
    }

    /// Close every window showing `surface` — the tracked one plus any
    /// host-side splits of it. The column collapses without gaps; nothing
    /// else moves.
    pub fn remove(
        &mut self,
        host: &mut impl Host,
        surface: SurfaceId,
    ) -> Result<(), HostError> {
        self.entries.retain(|e| e.surface != surface);
        for window in host.windows_in_column() {
            if host.window_surface(window) == Some(surface) {
                host.close_window(window)?;
            }
        }
        Ok(())
    }

    /// Close every register window, leaving the file suffix untouched in
    /// its original relative order.
    pub fn remove_all(&mut self, host: &mut impl Host) -> Result<(), HostError> {
        for surface in self.surfaces() {
            self.remove(host, surface)?;
        }
        self.entries.clear();
        Ok(())
    }

    /// The topmost window showing `surface`, if tracked.
    #[must_use]
    pub fn window_for(&self, surface: SurfaceId) -> Option<WindowId> {
        self.entries
            .iter()
            .find(|e| e.surface == surface)
            .map(|e| e.window)
    }

    /// The surface shown in a tracked window.
    #[must_use]
    pub fn surface_for_window(&self, window: WindowId) -> Option<SurfaceId> {
        self.entries
            .iter()
            .find(|e| e.window == window)
            .map(|e| e.surface)
    }

    /// Stop tracking a window that the host already closed (the external
    /// window-close path). Returns the forgotten entry, or `None` for
    /// windows the column never tracked.
    pub fn forget_window(&mut self, window: WindowId) -> Option<ColumnEntry> {
        let at = self.entries.iter().position(|e| e.window == window)?;
        Some(self.entries.remove(at))
    }

    /// Tracked entries, topmost first.
    #[must_use]
    pub fn entries(&self) -> &[ColumnEntry] {
        &self.entries
    }

    /// Number of tracked register windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no register windows are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct surfaces currently tracked, topmost first.
    fn surfaces(&self) -> Vec<SurfaceId> {
        let mut out = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.surface) {
                out.push(entry.surface);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
