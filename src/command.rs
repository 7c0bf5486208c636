//! The command façade — View, Edit, Close.
//!
//! [`RegisterPanes`] is one editing session's engine: it owns the host
//! handle, the surface registry, the window column and the options, and
//! exposes the three verbs plus the host event handlers. All state is
//! explicit and session-scoped — nothing here is a process-wide global.
//!
//! | Verb                  | Effect                                          |
//! |-----------------------|-------------------------------------------------|
//! | `view(names, h?)`     | Open each register read-mostly, small window    |
//! | `edit(names, h?)`     | Open each register read-write, tall window      |
//! | `close(names)`        | Close listed registers; empty closes everything |
//!
//! Per register the lifecycle is a straight line:
//!
//! ```text
//! Closed ──view──▶ Viewing ──edit──▶ Editing
//!    ▲                │                 │
//!    └────────────────┴──close──────────┘   (flush first if dirty)
//! ```
//!
//! `Viewing → Editing` is a promotion in place — same surface, same window,
//! repositioned to the top at the edit height. There is no automatic edge
//! back from Editing to Viewing: a `view` on an editing register leaves it
//! editing (edit wins).
//!
//! Multi-register commands process names in listed order, each insertion
//! going to the top of the register prefix, so the last-listed name ends up
//! topmost. A host failure mid-command is fatal for the name being
//! processed — that name is rolled back to nothing — while names already
//! processed stay committed. Partial completion, no global rollback.
//!
//! # Event handlers
//!
//! The host glue subscribes to its editor's events and forwards them here:
//!
//! - [`surface_saved`](RegisterPanes::surface_saved) on the save event —
//!   persists the surface to its register (warning first if the register
//!   diverged externally).
//! - [`surface_modified`](RegisterPanes::surface_modified) on the change
//!   event — marks the surface dirty.
//! - [`window_closed`](RegisterPanes::window_closed) on the close event —
//!   the mandatory teardown path for windows the user closes directly,
//!   without it a closed window would leave a lingering registry entry.
//!   Unknown windows are ignored, which makes duplicate notifications and
//!   engine-initiated closes safe to forward.

use crate::column::PaneColumn;
use crate::host::{Host, HostError, SurfaceId, WindowId};
use crate::mode::PaneMode;
use crate::options::PaneOptions;
use crate::registry::PaneRegistry;
use crate::surface::Surface;
use crate::sync;

/// One editing session's register-pane engine.
#[derive(Debug)]
pub struct RegisterPanes<H: Host> {
    host: H,
    registry: PaneRegistry,
    column: PaneColumn,
    options: PaneOptions,
}

impl<H: Host> RegisterPanes<H> {
    /// An engine over `host` with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, PaneOptions::default())
    }

    /// An engine over `host` with explicit height options.
    pub fn with_options(host: H, options: PaneOptions) -> Self {
        Self {
            host,
            registry: PaneRegistry::new(),
            column: PaneColumn::new(),
            options,
        }
    }

    /// The host, for glue that needs to reach the editor directly.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access (tests drive user edits through this).
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The current height options.
    pub const fn options(&self) -> &PaneOptions {
        &self.options
    }

    /// Mutable options access — the configuration surface for host glue.
    pub const fn options_mut(&mut self) -> &mut PaneOptions {
        &mut self.options
    }

    // -- Verbs --------------------------------------------------------------

    /// Open each named register in view mode. Registers already open in
    /// view mode are repositioned to the top; registers open in edit mode
    /// are left exactly as they are (edit wins). `height` overrides the
    /// view default for every name in this call.
    pub fn view(&mut self, names: &str, height: Option<u16>) -> Result<(), HostError> {
        for name in names.chars() {
            self.open_one(name, PaneMode::View, height)?;
        }
        Ok(())
    }

    /// Open each named register in edit mode, promoting open view panes in
    /// place. `height` overrides the edit default for every name.
    pub fn edit(&mut self, names: &str, height: Option<u16>) -> Result<(), HostError> {
        for name in names.chars() {
            self.open_one(name, PaneMode::Edit, height)?;
        }
        Ok(())
    }

    /// Close the listed registers, or every open register when `names` is
    /// empty. Unopened names are no-ops. Dirty surfaces are persisted
    /// before their windows close.
    pub fn close(&mut self, names: &str) -> Result<(), HostError> {
        if names.is_empty() {
            for name in self.registry.open_names() {
                self.close_one(name)?;
            }
        } else {
            for name in names.chars() {
                self.close_one(name)?;
            }
        }
        Ok(())
    }

    // -- Introspection ------------------------------------------------------

    /// The whole window column, top to bottom: register prefix, then the
    /// host's file windows.
    pub fn column_order(&self) -> Vec<WindowId> {
        self.host.windows_in_column()
    }

    /// The window showing `name`'s pane, if that register is open.
    #[must_use]
    pub fn window_for(&self, name: char) -> Option<WindowId> {
        let surface = self.registry.lookup(name)?;
        self.column.window_for(surface.id())
    }

    /// Open register names, most-recently-opened first.
    #[must_use]
    pub fn open_registers(&self) -> Vec<char> {
        self.registry.open_names()
    }

    /// The mode `name`'s pane is in, if open.
    #[must_use]
    pub fn mode_of(&self, name: char) -> Option<PaneMode> {
        self.registry.lookup(name).map(Surface::mode)
    }

    // -- Host event handlers ------------------------------------------------

    /// The surface was saved in the host: persist it to its register.
    /// Warns (and proceeds — last writer wins) when the register changed
    /// externally since the last sync. Surfaces this engine does not know
    /// are ignored.
    pub fn surface_saved(&mut self, surface: SurfaceId) -> Result<(), HostError> {
        let Some(entry) = self.registry.find_by_surface_mut(surface) else {
            return Ok(());
        };
        if sync::diverged(&self.host, entry) {
            log::warn!(
                "register '{}' changed externally since last sync; overwriting",
                entry.register()
            );
        }
        sync::persist(&mut self.host, entry)
    }

    /// The surface's content changed in the host: remember that a flush is
    /// owed at close time.
    pub fn surface_modified(&mut self, surface: SurfaceId) {
        if let Some(entry) = self.registry.find_by_surface_mut(surface) {
            entry.mark_dirty();
        }
    }

    /// A window was closed in the host (not through [`close`](Self::close)).
    ///
    /// When that was the last window showing its surface, the surface is
    /// flushed (if dirty), destroyed, and unbound — the pane's lifecycle is
    /// anchored to window visibility, not to commands. Windows this engine
    /// does not track are ignored.
    pub fn window_closed(&mut self, window: WindowId) -> Result<(), HostError> {
        let Some(entry) = self.column.forget_window(window) else {
            return Ok(());
        };
        let surface = entry.surface;
        let visible_elsewhere = self
            .host
            .windows_in_column()
            .iter()
            .any(|&w| self.host.window_surface(w) == Some(surface));
        if visible_elsewhere {
            return Ok(());
        }
        let Some(record) = self.registry.find_by_surface_mut(surface) else {
            return Ok(());
        };
        let name = record.register();
        if record.is_dirty() {
            sync::persist(&mut self.host, record)?;
        }
        self.host.destroy_surface(surface)?;
        self.registry.unbind(name);
        log::debug!("register '{name}' torn down after external window close");
        Ok(())
    }

    // -- Internals ----------------------------------------------------------

    fn open_one(
        &mut self,
        name: char,
        mode: PaneMode,
        explicit: Option<u16>,
    ) -> Result<(), HostError> {
        if let Some(surface) = self.registry.lookup(name) {
            let id = surface.id();
            let already_edit = surface.mode().is_edit();
            self.registry.touch(name);
            match mode {
                // Edit wins over view: no downgrade, no layout churn.
                PaneMode::View if already_edit => {}
                PaneMode::View => {
                    let height = explicit.unwrap_or(self.options.view_height);
                    self.column.reposition(&mut self.host, id, height)?;
                }
                PaneMode::Edit => {
                    if self.registry.promote(name) {
                        log::debug!("promoted register '{name}' to edit");
                    }
                    let height = explicit.unwrap_or(self.options.edit_height);
                    self.column.reposition(&mut self.host, id, height)?;
                }
            }
            return Ok(());
        }

        // First open: hydrate once, then surface, then window.
        let content = sync::hydrate(&self.host, name);
        let surface = self.host.create_surface(&content)?;
        let height = explicit.unwrap_or(self.options.height_for(mode));
        let window = match self.column.insert(&mut self.host, surface, height) {
            Ok(window) => window,
            Err(err) => {
                // The half-open surface must not outlive the failed command.
                let _ = self.host.destroy_surface(surface);
                return Err(err);
            }
        };
        log::debug!("opened register '{name}' in {mode} (surface {surface}, window {window})");
        self.registry.bind(Surface::new(surface, name, mode, content));
        Ok(())
    }

    fn close_one(&mut self, name: char) -> Result<(), HostError> {
        let Some(surface) = self.registry.lookup_mut(name) else {
            return Ok(()); // closing an unopened register is a no-op
        };
        let id = surface.id();
        if surface.is_dirty() {
            sync::persist(&mut self.host, surface)?;
        }
        self.column.remove(&mut self.host, id)?;
        self.host.destroy_surface(id)?;
        self.registry.unbind(name);
        log::debug!("closed register '{name}'");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
