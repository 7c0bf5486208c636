//! Host capability boundary — the narrow interface to the editor.
//!
//! The engine never calls editor primitives directly. Everything it needs
//! from the host is collected into the [`Host`] trait, one method group per
//! concern:
//!
//! - **Registers** — the host's named-register store. Single-call reads and
//!   writes, no transactions, no locking. The store is process-wide and may
//!   be mutated behind the engine's back; see the sync layer for how that
//!   race is (deliberately not) handled.
//! - **Surfaces** — ephemeral editable text containers the host manages on
//!   the engine's behalf. The engine creates one per open register and
//!   destroys it when the last window showing it goes away.
//! - **Windows** — the host's window column. The engine opens, closes,
//!   moves and resizes windows, and reads the column order back for
//!   introspection.
//!
//! Save, change and close *events* flow the other way: host glue subscribes
//! to its editor's event system and forwards them to the handlers on
//! [`RegisterPanes`](crate::command::RegisterPanes).
//!
//! [`MemoryHost`] is the complete in-memory implementation. Every test runs
//! against it, and an embedder can use it to drive the engine headless. It
//! also knows how to fail on demand, so the error contract is testable.

use std::collections::HashMap;

use ropey::Rope;
use thiserror::Error;

/// Unique surface identifier. Monotonically increasing, never reused.
pub type SurfaceId = usize;

/// Unique window identifier. Monotonically increasing, never reused.
pub type WindowId = usize;

/// A host operation that could not be carried out.
///
/// Any of these is fatal to the single register being processed when it
/// occurs; the engine rolls that register back to nothing and propagates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A surface id that the host does not know (already destroyed?).
    #[error("unknown surface: {0}")]
    UnknownSurface(SurfaceId),

    /// A window id that the host does not know (already closed?).
    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    /// The host refused to create a surface.
    #[error("surface creation failed: {0}")]
    SurfaceCreation(String),

    /// The host refused to open a window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

// ---------------------------------------------------------------------------
// Host trait
// ---------------------------------------------------------------------------

/// The capability surface the engine needs from its host editor.
///
/// Implementations are expected to be cheap and synchronous — every call
/// happens on the host's UI thread between user commands.
pub trait Host {
    // -- Registers ----------------------------------------------------------

    /// Read a register's content. `None` when the register has never been
    /// written — callers treat that as empty, not as an error.
    fn read_register(&self, name: char) -> Option<Rope>;

    /// Overwrite a register's content. Last writer wins.
    fn write_register(&mut self, name: char, text: &Rope);

    // -- Surfaces -----------------------------------------------------------

    /// Create a surface holding `initial`.
    fn create_surface(&mut self, initial: &Rope) -> Result<SurfaceId, HostError>;

    /// Destroy a surface. The caller closes its windows first.
    fn destroy_surface(&mut self, surface: SurfaceId) -> Result<(), HostError>;

    /// The surface's current text, including any unsaved user edits.
    fn surface_text(&self, surface: SurfaceId) -> Result<Rope, HostError>;

    /// Replace the surface's text wholesale.
    fn set_surface_text(&mut self, surface: SurfaceId, text: &Rope) -> Result<(), HostError>;

    // -- Windows ------------------------------------------------------------

    /// Open a window showing `surface` at `position` in the column
    /// (0 = topmost), `height` rows tall.
    fn open_window(
        &mut self,
        surface: SurfaceId,
        height: u16,
        position: usize,
    ) -> Result<WindowId, HostError>;

    /// Close a window. The surface it showed lives on until destroyed.
    fn close_window(&mut self, window: WindowId) -> Result<(), HostError>;

    /// Move a window to `position` in the column, shifting the rest.
    fn move_window(&mut self, window: WindowId, position: usize) -> Result<(), HostError>;

    /// Change a window's height.
    fn resize_window(&mut self, window: WindowId, height: u16) -> Result<(), HostError>;

    /// All windows in the column, top to bottom. Includes the caller's
    /// windows and the host's own file windows.
    fn windows_in_column(&self) -> Vec<WindowId>;

    /// A window's current height, or `None` for an unknown window.
    fn window_height(&self, window: WindowId) -> Option<u16>;

    /// The surface a window shows, or `None` for file windows and unknown
    /// windows.
    fn window_surface(&self, window: WindowId) -> Option<SurfaceId>;
}

// ---------------------------------------------------------------------------
// MemoryHost
// ---------------------------------------------------------------------------

/// What a [`MemoryHost`] window is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WindowContent {
    /// An engine-created surface.
    Surface(SurfaceId),
    /// A host-owned file window (named for test assertions).
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryWindow {
    id: WindowId,
    content: WindowContent,
    height: u16,
}

/// In-memory [`Host`] — a headless editor.
///
/// Registers live in a map, surfaces are ropes, and the window column is a
/// plain vector ordered top to bottom. File windows are created with
/// [`open_file_window`](Self::open_file_window) and behave like the host
/// editor's own windows: the engine never opens or reorders them, only
/// stacks its register windows above.
#[derive(Debug, Default)]
pub struct MemoryHost {
    registers: HashMap<char, Rope>,
    surfaces: HashMap<SurfaceId, Rope>,
    column: Vec<MemoryWindow>,
    next_surface: SurfaceId,
    next_window: WindowId,
    fail_surface: bool,
    fail_window: bool,
}

impl MemoryHost {
    /// An empty host: no registers, no surfaces, no windows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a register, as a user's yank or an external script would.
    pub fn set_register(&mut self, name: char, text: &str) {
        self.registers.insert(name, Rope::from_str(text));
    }

    /// A register's content as a `String`, or `None` if never written.
    #[must_use]
    pub fn register(&self, name: char) -> Option<String> {
        self.registers.get(&name).map(Rope::to_string)
    }

    /// Append a file window at the bottom of the column and return its id.
    /// This models a window the user already had open.
    pub fn open_file_window(&mut self, name: &str) -> WindowId {
        let id = self.alloc_window();
        self.column.push(MemoryWindow {
            id,
            content: WindowContent::File(name.to_string()),
            height: 0,
        });
        id
    }

    /// The file name a window shows, or `None` for surface windows.
    #[must_use]
    pub fn window_file(&self, window: WindowId) -> Option<&str> {
        self.find(window).and_then(|w| match &w.content {
            WindowContent::File(name) => Some(name.as_str()),
            WindowContent::Surface(_) => None,
        })
    }

    /// Arm a one-shot failure for the next [`Host::create_surface`].
    pub fn fail_next_surface(&mut self) {
        self.fail_surface = true;
    }

    /// Arm a one-shot failure for the next [`Host::open_window`].
    pub fn fail_next_window(&mut self) {
        self.fail_window = true;
    }

    /// Number of live surfaces (leak check for tests).
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn alloc_window(&mut self) -> WindowId {
        self.next_window += 1;
        self.next_window
    }

    fn find(&self, window: WindowId) -> Option<&MemoryWindow> {
        self.column.iter().find(|w| w.id == window)
    }

    fn index_of(&self, window: WindowId) -> Option<usize> {
        self.column.iter().position(|w| w.id == window)
    }
}

impl Host for MemoryHost {
    fn read_register(&self, name: char) -> Option<Rope> {
        self.registers.get(&name).cloned()
    }

    fn write_register(&mut self, name: char, text: &Rope) {
        self.registers.insert(name, text.clone());
    }

    fn create_surface(&mut self, initial: &Rope) -> Result<SurfaceId, HostError> {
        if std::mem::take(&mut self.fail_surface) {
            return Err(HostError::SurfaceCreation("injected failure".into()));
        }
        self.next_surface += 1;
        self.surfaces.insert(self.next_surface, initial.clone());
        Ok(self.next_surface)
    }

    fn destroy_surface(&mut self, surface: SurfaceId) -> Result<(), HostError> {
        self.surfaces
            .remove(&surface)
            .map(|_| ())
            .ok_or(HostError::UnknownSurface(surface))
    }

    fn surface_text(&self, surface: SurfaceId) -> Result<Rope, HostError> {
        self.surfaces
            .get(&surface)
            .cloned()
            .ok_or(HostError::UnknownSurface(surface))
    }

    fn set_surface_text(&mut self, surface: SurfaceId, text: &Rope) -> Result<(), HostError> {
        match self.surfaces.get_mut(&surface) {
            Some(content) => {
                *content = text.clone();
                Ok(())
            }
            None => Err(HostError::UnknownSurface(surface)),
        }
    }

    fn open_window(
        &mut self,
        surface: SurfaceId,
        height: u16,
        position: usize,
    ) -> Result<WindowId, HostError> {
        if std::mem::take(&mut self.fail_window) {
            return Err(HostError::WindowCreation("injected failure".into()));
        }
        if !self.surfaces.contains_key(&surface) {
            return Err(HostError::UnknownSurface(surface));
        }
        let id = self.alloc_window();
        let at = position.min(self.column.len());
        self.column.insert(
            at,
            MemoryWindow { id, content: WindowContent::Surface(surface), height },
        );
        Ok(id)
    }

    fn close_window(&mut self, window: WindowId) -> Result<(), HostError> {
        match self.index_of(window) {
            Some(at) => {
                self.column.remove(at);
                Ok(())
            }
            None => Err(HostError::UnknownWindow(window)),
        }
    }

    fn move_window(&mut self, window: WindowId, position: usize) -> Result<(), HostError> {
        let at = self.index_of(window).ok_or(HostError::UnknownWindow(window))?;
        let entry = self.column.remove(at);
        let to = position.min(self.column.len());
        self.column.insert(to, entry);
        Ok(())
    }

    fn resize_window(&mut self, window: WindowId, height: u16) -> Result<(), HostError> {
        let at = self.index_of(window).ok_or(HostError::UnknownWindow(window))?;
        self.column[at].height = height;
        Ok(())
    }

    fn windows_in_column(&self) -> Vec<WindowId> {
        self.column.iter().map(|w| w.id).collect()
    }

    fn window_height(&self, window: WindowId) -> Option<u16> {
        self.find(window).map(|w| w.height)
    }

    fn window_surface(&self, window: WindowId) -> Option<SurfaceId> {
        self.find(window).and_then(|w| match w.content {
            WindowContent::Surface(id) => Some(id),
            WindowContent::File(_) => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
