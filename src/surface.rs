//! Surface — the record for one open register pane.
//!
//! A `Surface` pairs a host surface id with the register it is bound to,
//! plus the state the engine needs to keep the two coherent: the mode the
//! pane is in, a dirty flag (unsaved local edits), and the last-synced
//! snapshot — the content as of the most recent hydrate or persist.
//!
//! The snapshot does two jobs. It is the reference point for divergence
//! detection (did an external writer change the register since we last
//! synced?), and it lets a clean close skip the final flush: if the user
//! never touched the pane there is nothing to write back, and whatever an
//! external agent put in the register meanwhile survives.
//!
//! Invariant: a live surface is bound to exactly one register name, and at
//! most one surface per register is open at a time — the registry enforces
//! the second half.

use ropey::Rope;

use crate::host::SurfaceId;
use crate::mode::PaneMode;

/// One open register pane: host surface id, binding, and sync state.
#[derive(Debug, Clone)]
pub struct Surface {
    id: SurfaceId,
    register: char,
    mode: PaneMode,
    dirty: bool,
    last_synced: Rope,
}

impl Surface {
    /// A freshly hydrated surface. The hydrated content becomes the first
    /// last-synced snapshot.
    #[must_use]
    pub const fn new(id: SurfaceId, register: char, mode: PaneMode, hydrated: Rope) -> Self {
        Self { id, register, mode, dirty: false, last_synced: hydrated }
    }

    /// The host's id for this surface.
    #[must_use]
    pub const fn id(&self) -> SurfaceId {
        self.id
    }

    /// The register this surface is bound to.
    #[must_use]
    pub const fn register(&self) -> char {
        self.register
    }

    /// The pane's current mode.
    #[must_use]
    pub const fn mode(&self) -> PaneMode {
        self.mode
    }

    /// True when the pane has edits not yet persisted to its register.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Promote view → edit in place. Returns `true` if the mode changed;
    /// an edit pane stays edit (never downgraded).
    pub fn promote(&mut self) -> bool {
        let next = self.mode.promoted_to(PaneMode::Edit);
        let changed = next != self.mode;
        self.mode = next;
        changed
    }

    /// Record that the host reported unsaved edits in this surface.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Record a completed sync: `text` is now both the surface's and the
    /// register's content. Clears the dirty flag.
    pub fn synced(&mut self, text: Rope) {
        self.last_synced = text;
        self.dirty = false;
    }

    /// The content as of the last hydrate or persist.
    #[must_use]
    pub const fn last_synced(&self) -> &Rope {
        &self.last_synced
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
