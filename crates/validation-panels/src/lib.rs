pub mod dark_proteome;
pub mod molecular;

pub use dark_proteome::{dark_proteome_section, DarkProteomeCandidate, CANDIDATES};
pub use molecular::{molecular_validation_section, NATIVE_CD40L_AFFINITY};
