//! Deduction engine: which items can still be in the envelope.

pub mod engine;

pub use engine::{
    candidate_items, candidates, is_candidate, is_solution_item, CategoryCandidates,
    DeductionSummary, Envelope,
};
