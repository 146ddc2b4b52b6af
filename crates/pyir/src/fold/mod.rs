//! Local simplification of nodes.
//!
//! A fold inspects one node and its operands and either names an existing
//! value that can stand in for the node, or reports no simplification.
//! Rules never create nodes and never introduce undefined types, so they can
//! be attempted repeatedly and in any order.
//!
//! Rules:
//! - Arg: folds to the formal argument it reads; a missing or differently
//!   typed formal argument is a consistency error
//! - Cast: folds to its operand when both carry the same, non-undefined type
//! - StaticGetItem / PairFirst / PairSecond through BuildTuple (opt-in, see
//!   `FoldConfig::structural`)

mod pass;
mod rules;


pub use pass::{FoldPass, FoldStats};
pub use rules::try_fold;

pub(crate) use rules::fold_local;
