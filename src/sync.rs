//! Sync engine — the bidirectional register ↔ surface bridge.
//!
//! Three operations, all single-shot:
//!
//! - [`hydrate`] fills a fresh surface from its register. A register nobody
//!   has written yet reads as empty content, not as an error.
//! - [`persist`] writes a surface's current text back over its register.
//!   Last writer wins — the register store has no locking, so if an
//!   external agent wrote the register since hydration, its write is
//!   overwritten here. That race is accepted, not fixed.
//! - [`diverged`] is the best-effort consolation: it compares the
//!   register's current content to the surface's last-synced snapshot, so
//!   callers can warn before a persist clobbers an external write. It never
//!   blocks anything.
//!
//! Hydration happens exactly once per surface, at creation. Re-opening an
//! already-open register does not re-read the store — which is precisely
//! why [`diverged`] exists.

use ropey::Rope;

use crate::host::{Host, HostError};
use crate::surface::Surface;

/// Read a register's content for a fresh surface. An absent register is
/// empty content, not an error.
pub fn hydrate(host: &impl Host, name: char) -> Rope {
    host.read_register(name).unwrap_or_default()
}

/// Write the surface's current text over its register, unconditionally,
/// and mark the surface clean with a fresh snapshot.
pub fn persist(host: &mut impl Host, surface: &mut Surface) -> Result<(), HostError> {
    let text = host.surface_text(surface.id())?;
    host.write_register(surface.register(), &text);
    log::debug!(
        "persisted register '{}' ({} chars)",
        surface.register(),
        text.len_chars()
    );
    surface.synced(text);
    Ok(())
}

/// True when the register no longer matches the surface's last-synced
/// snapshot — an external writer touched it after hydration.
pub fn diverged(host: &impl Host, surface: &Surface) -> bool {
    let current = host.read_register(surface.register()).unwrap_or_default();
    current != *surface.last_synced()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
