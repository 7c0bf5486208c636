//! Surface registry — which registers are open, and in what.
//!
//! A plain ordered table from register name to [`Surface`], front =
//! most-recently-opened. The registry is a pure data structure: it never
//! talks to the host and never hydrates content — the command layer
//! orchestrates that, then records the result here. Keys are exactly the
//! currently-open surfaces; an entry leaves the table exactly when its
//! surface is destroyed.
//!
//! The alphabet of valid names is the host's business. The registry happily
//! tracks any `char`; a register nobody ever wrote just hydrates empty.

use crate::host::SurfaceId;
use crate::surface::Surface;

/// Ordered table of open register panes (most-recently-opened first).
#[derive(Debug, Default)]
pub struct PaneRegistry {
    open: Vec<Surface>,
}

impl PaneRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly created surface at the front of the open order.
    ///
    /// The caller guarantees the name is not already bound (re-opens go
    /// through [`touch`](Self::touch) / [`promote`](Self::promote) instead).
    pub fn bind(&mut self, surface: Surface) {
        debug_assert!(self.lookup(surface.register()).is_none());
        self.open.insert(0, surface);
    }

    /// The surface bound to `name`, if open.
    #[must_use]
    pub fn lookup(&self, name: char) -> Option<&Surface> {
        self.open.iter().find(|s| s.register() == name)
    }

    /// Mutable access to the surface bound to `name`.
    pub fn lookup_mut(&mut self, name: char) -> Option<&mut Surface> {
        self.open.iter_mut().find(|s| s.register() == name)
    }

    /// Reverse lookup by surface id — used by the save/close event handlers,
    /// which only know the host's surface id.
    pub fn find_by_surface_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.open.iter_mut().find(|s| s.id() == id)
    }

    /// Promote `name` view → edit in place. `false` when not open or
    /// already editing.
    pub fn promote(&mut self, name: char) -> bool {
        self.lookup_mut(name).is_some_and(Surface::promote)
    }

    /// Move an open register to the front of the open order (a re-open
    /// refreshes recency). `false` when not open.
    pub fn touch(&mut self, name: char) -> bool {
        match self.open.iter().position(|s| s.register() == name) {
            Some(at) => {
                let surface = self.open.remove(at);
                self.open.insert(0, surface);
                true
            }
            None => false,
        }
    }

    /// Remove the entry for `name`, returning its surface. `None` (a no-op)
    /// when the register was not open.
    pub fn unbind(&mut self, name: char) -> Option<Surface> {
        let at = self.open.iter().position(|s| s.register() == name)?;
        Some(self.open.remove(at))
    }

    /// Open register names, most-recently-opened first.
    #[must_use]
    pub fn open_names(&self) -> Vec<char> {
        self.open.iter().map(Surface::register).collect()
    }

    /// Number of open registers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// True when nothing is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
