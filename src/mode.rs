//! Pane mode — how a register pane treats its content.
//!
//! Every open register pane is in exactly one [`PaneMode`]. The mode decides
//! the pane's window weight and whether edits are expected:
//!
//! | Mode | Window height     | Purpose                         |
//! |------|-------------------|---------------------------------|
//! | View | small (default 5) | Glance at a register's content  |
//! | Edit | tall (default 15) | Rework a register in place      |
//!
//! Modes only move one way: a View pane can be promoted to Edit (requesting
//! Edit on an open View pane upgrades it in place), but an Edit pane is never
//! downgraded — requesting View on an Edit pane leaves it editing. This is a
//! pure data type; the promotion itself is carried out by the registry and
//! the command layer.

use std::fmt;

/// The mode a register pane was opened in (or promoted to).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneMode {
    /// Read-mostly pane with a low window weight.
    #[default]
    View,
    /// Read-write pane with the full window weight. Promotion target.
    Edit,
}

impl PaneMode {
    /// Human-readable name for status-line glue.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Edit => "EDIT",
        }
    }

    /// The mode after a request for `requested` arrives on a pane already in
    /// `self`. Edit wins; a pane never leaves Edit because of a View request.
    #[must_use]
    pub const fn promoted_to(self, requested: Self) -> Self {
        match requested {
            Self::Edit => Self::Edit,
            Self::View => self,
        }
    }

    /// True for [`PaneMode::Edit`].
    #[inline]
    #[must_use]
    pub const fn is_edit(self) -> bool {
        matches!(self, Self::Edit)
    }
}

impl fmt::Display for PaneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_view() {
        assert_eq!(PaneMode::default(), PaneMode::View);
    }

    #[test]
    fn display_names() {
        assert_eq!(PaneMode::View.display_name(), "VIEW");
        assert_eq!(PaneMode::Edit.display_name(), "EDIT");
        assert_eq!(format!("{}", PaneMode::Edit), "EDIT");
    }

    // ── Promotion ────────────────────────────────────────────────────────

    #[test]
    fn view_promotes_to_edit() {
        assert_eq!(
            PaneMode::View.promoted_to(PaneMode::Edit),
            PaneMode::Edit
        );
    }

    #[test]
    fn edit_never_downgrades() {
        assert_eq!(
            PaneMode::Edit.promoted_to(PaneMode::View),
            PaneMode::Edit
        );
    }

    #[test]
    fn promotion_is_idempotent() {
        assert_eq!(
            PaneMode::Edit.promoted_to(PaneMode::Edit),
            PaneMode::Edit
        );
        assert_eq!(
            PaneMode::View.promoted_to(PaneMode::View),
            PaneMode::View
        );
    }

    #[test]
    fn is_edit() {
        assert!(PaneMode::Edit.is_edit());
        assert!(!PaneMode::View.is_edit());
    }
}
