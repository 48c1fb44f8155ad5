mod comparison;
mod rationale;
mod section;
#[cfg(test)]
mod tests;

pub use comparison::{
    synergy_comparison, AGONIST_ONLY_RESPONSE, COMPARISON_DATASET, KNOCKOUT_ONLY_RESPONSE,
};
pub use rationale::{failure_modes, synergy_context};
pub use section::crispr_synergy_section;
