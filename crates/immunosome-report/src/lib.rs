pub mod assembler;
pub mod builder;
pub mod module;

pub use assembler::{build_module_report, build_report};
pub use builder::{immunosome_builder_section, ANTIGEN_PRESENTATION_GAIN_PCT};
pub use module::FrameworkModule;
