//! Fixpoint driver over a whole module.

use indexmap::IndexMap;

use super::try_fold;
use crate::FoldConfig;
use crate::ir::{ConsistencyError, Module, OpId};

/// Statistics from a fold pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FoldStats {
    /// Rounds executed, including the final one that found nothing.
    pub rounds: u32,
    /// Number of nodes folded away.
    pub folded: usize,
    /// Folded nodes per kind mnemonic, in first-seen order.
    pub by_kind: IndexMap<&'static str, usize>,
}

/// Folds every live node, rewiring uses to the replacement and marking the
/// folded node dead, until nothing changes or `max_rounds` is reached.
///
/// A consistency error aborts the pass; nodes folded before the error stay
/// folded.
#[derive(Debug, Clone, Default)]
pub struct FoldPass {
    config: FoldConfig,
}

impl FoldPass {
    pub fn new(config: FoldConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, module: &mut Module) -> Result<FoldStats, ConsistencyError> {
        let span = tracing::debug_span!("fold_pass", max_rounds = self.config.max_rounds);
        let _guard = span.enter();

        let mut stats = FoldStats::default();
        while stats.rounds < self.config.max_rounds {
            stats.rounds += 1;
            let live: Vec<OpId> = module.ops().map(|(id, _)| id).collect();

            let mut changed = false;
            for op in live {
                let Some(replacement) = try_fold(module, op, &self.config)? else {
                    continue;
                };

                let operation = module.op(op);
                let kind = operation.kind().name();
                let result = operation.result();
                let rewritten = module.rewrite_uses(result, replacement);
                module.kill_op(op);

                tracing::debug!(%op, kind, %replacement, rewritten, "folded");
                *stats.by_kind.entry(kind).or_default() += 1;
                stats.folded += 1;
                changed = true;
            }

            if !changed {
                break;
            }
        }

        tracing::debug!(rounds = stats.rounds, folded = stats.folded, "fold pass done");
        Ok(stats)
    }
}
