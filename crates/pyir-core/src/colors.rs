//! Terminal styling for module dumps.
//!
//! Each field is the escape sequence for one syntactic role, so printers ask
//! for "the type color" rather than for a specific hue.

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Escape sequences per role; all empty when styling is off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Operation mnemonics and function names.
    pub op: &'static str,
    /// `PyType<..>` annotations.
    pub ty: &'static str,
    /// Attribute dictionaries and the folded-node marker.
    pub muted: &'static str,
    /// Closes any of the above.
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        op: BLUE,
        ty: GREEN,
        muted: DIM,
        reset: RESET,
    };

    pub const OFF: Self = Self {
        op: "",
        ty: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
