//! Pane sizing options.
//!
//! Two tunables, one per [`PaneMode`]: the default window height for view
//! panes and for edit panes. An explicit height passed to a View/Edit command
//! overrides both. Edit is expected to be the taller of the two but that is
//! not enforced.
//!
//! [`PaneOptions::assign`] is the configuration surface for host glue — it
//! accepts `:set`-style `name=value` assignments so an embedder can forward
//! whatever its own option system produces:
//!
//! | Full name     | Abbrev | Default |
//! |---------------|--------|---------|
//! | `view-height` | `vh`   | 5       |
//! | `edit-height` | `eh`   | 15      |

use thiserror::Error;

use crate::mode::PaneMode;

/// Default height of a view-mode pane window, in rows.
pub const DEFAULT_VIEW_HEIGHT: u16 = 5;

/// Default height of an edit-mode pane window, in rows.
pub const DEFAULT_EDIT_HEIGHT: u16 = 15;

/// A rejected option assignment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The option name is not one of ours.
    #[error("unknown option: {0}")]
    Unknown(String),

    /// The value is not a positive integer.
    #[error("invalid value for {name}: {value} (expected a positive row count)")]
    InvalidValue {
        /// The option that was being assigned.
        name: &'static str,
        /// The offending value, verbatim.
        value: String,
    },
}

/// The per-mode default window heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneOptions {
    /// Rows given to a view-mode pane when no explicit height is requested.
    pub view_height: u16,
    /// Rows given to an edit-mode pane when no explicit height is requested.
    pub edit_height: u16,
}

impl Default for PaneOptions {
    fn default() -> Self {
        Self {
            view_height: DEFAULT_VIEW_HEIGHT,
            edit_height: DEFAULT_EDIT_HEIGHT,
        }
    }
}

impl PaneOptions {
    /// The default height for a pane opened in `mode`.
    #[must_use]
    pub const fn height_for(self, mode: PaneMode) -> u16 {
        match mode {
            PaneMode::View => self.view_height,
            PaneMode::Edit => self.edit_height,
        }
    }

    /// Apply a `name=value` assignment.
    ///
    /// Accepts full names and abbreviations (`view-height`/`vh`,
    /// `edit-height`/`eh`). Zero and non-numeric values are rejected — a
    /// zero-height window cannot show anything.
    pub fn assign(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let (slot, canonical): (&mut u16, &'static str) = match name {
            "view-height" | "vh" => (&mut self.view_height, "view-height"),
            "edit-height" | "eh" => (&mut self.edit_height, "edit-height"),
            _ => return Err(OptionError::Unknown(name.to_string())),
        };
        match value.parse::<u16>() {
            Ok(rows) if rows > 0 => {
                *slot = rows;
                Ok(())
            }
            _ => Err(OptionError::InvalidValue {
                name: canonical,
                value: value.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = PaneOptions::default();
        assert_eq!(opts.view_height, DEFAULT_VIEW_HEIGHT);
        assert_eq!(opts.edit_height, DEFAULT_EDIT_HEIGHT);
        assert!(opts.edit_height > opts.view_height);
    }

    #[test]
    fn height_for_mode() {
        let opts = PaneOptions { view_height: 3, edit_height: 20 };
        assert_eq!(opts.height_for(PaneMode::View), 3);
        assert_eq!(opts.height_for(PaneMode::Edit), 20);
    }

    // ── assign ───────────────────────────────────────────────────────────

    #[test]
    fn assign_full_names() {
        let mut opts = PaneOptions::default();
        opts.assign("view-height", "7").unwrap();
        opts.assign("edit-height", "21").unwrap();
        assert_eq!(opts.view_height, 7);
        assert_eq!(opts.edit_height, 21);
    }

    #[test]
    fn assign_abbreviations() {
        let mut opts = PaneOptions::default();
        opts.assign("vh", "2").unwrap();
        opts.assign("eh", "9").unwrap();
        assert_eq!(opts.view_height, 2);
        assert_eq!(opts.edit_height, 9);
    }

    #[test]
    fn assign_unknown_option() {
        let mut opts = PaneOptions::default();
        assert_eq!(
            opts.assign("scrolloff", "5"),
            Err(OptionError::Unknown("scrolloff".into()))
        );
        assert_eq!(opts, PaneOptions::default());
    }

    #[test]
    fn assign_rejects_zero() {
        let mut opts = PaneOptions::default();
        let err = opts.assign("vh", "0").unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidValue { name: "view-height", value: "0".into() }
        );
        assert_eq!(opts.view_height, DEFAULT_VIEW_HEIGHT);
    }

    #[test]
    fn assign_rejects_garbage() {
        let mut opts = PaneOptions::default();
        assert!(opts.assign("edit-height", "tall").is_err());
        assert!(opts.assign("eh", "-3").is_err());
        assert!(opts.assign("eh", "").is_err());
    }

    #[test]
    fn error_display() {
        let err = OptionError::InvalidValue { name: "view-height", value: "x".into() };
        assert_eq!(
            err.to_string(),
            "invalid value for view-height: x (expected a positive row count)"
        );
        assert_eq!(
            OptionError::Unknown("foo".into()).to_string(),
            "unknown option: foo"
        );
    }
}
