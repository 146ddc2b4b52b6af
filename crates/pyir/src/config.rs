//! Configuration for folding and printing.

use pyir_core::Colors;

/// Options for the folding engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldConfig {
    /// Attempt folding as soon as a node is built
    pub(crate) fold_on_build: bool,
    /// Enable tuple/pair structural rules
    pub(crate) structural: bool,
    /// Upper bound on fold pass iterations
    pub(crate) max_rounds: u32,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            fold_on_build: false,
            structural: false,
            max_rounds: 8,
        }
    }
}

impl FoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the builder folds nodes immediately after creating them.
    ///
    /// Arg nodes are never folded on build: their result type is still
    /// pending inference at that point.
    pub fn fold_on_build(mut self, value: bool) -> Self {
        self.fold_on_build = value;
        self
    }

    /// Set whether tuple element and pair projections fold through
    /// `build_tuple`.
    pub fn structural(mut self, value: bool) -> Self {
        self.structural = value;
        self
    }

    /// Set the maximum number of fold pass rounds.
    pub fn max_rounds(mut self, value: u32) -> Self {
        self.max_rounds = value;
        self
    }
}

/// Options for `ModulePrinter`.
#[derive(Clone, Debug, Default)]
pub struct PrintConfig {
    pub(crate) colors: Colors,
    pub(crate) show_dead: bool,
}

impl PrintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    /// Set whether folded-away operations are printed (marked with `✗`).
    pub fn show_dead(mut self, value: bool) -> Self {
        self.show_dead = value;
        self
    }
}
