//! # regpane — editor registers as live pane windows
//!
//! Opens named registers of a host text editor as editable, synchronized
//! panes stacked above the user's file windows, and keeps each pane
//! coherent with its register across edits, saves and closes.
//!
//! - **[`host`]** — the capability boundary: the `Host` trait the engine
//!   drives, plus `MemoryHost`, the in-memory editor used by tests
//! - **[`mode`]** — view/edit pane mode and the promotion rule
//! - **[`options`]** — per-mode window height tunables
//! - **[`surface`]** — one open pane's record: binding, mode, dirty flag,
//!   last-synced snapshot
//! - **[`registry`]** — which registers are open, most-recent first
//! - **[`column`]** — the register-window prefix of the window column
//! - **[`sync`]** — hydrate / persist / divergence detection
//! - **[`command`]** — `RegisterPanes`, the View / Edit / Close façade and
//!   the host event handlers
//!
//! ```text
//! user command ──▶ RegisterPanes ──▶ PaneRegistry   (who is open)
//!                        │      └──▶ PaneColumn     (where the windows sit)
//!                        │      └──▶ sync           (register ◀──▶ surface)
//!                        ▼
//!                   Host trait  ──▶ the editor (or MemoryHost)
//! ```

pub mod column;
pub mod command;
pub mod host;
pub mod mode;
pub mod options;
pub mod registry;
pub mod surface;
pub mod sync;
