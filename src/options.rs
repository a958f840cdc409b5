//! Knobs for the semantic stages.

/// Controls what the collector installs and requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Install the `System.out` / `System.in` declarations.
    pub builtins: bool,
    /// Report `MissingEntryPoint` when no class declares `main`.
    pub require_entry_point: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            builtins: true,
            require_entry_point: true,
        }
    }
}

impl Options {
    /// Options for checking a fragment: no builtins, no `main` required.
    pub fn bare() -> Self {
        Options {
            builtins: false,
            require_entry_point: false,
        }
    }
}
