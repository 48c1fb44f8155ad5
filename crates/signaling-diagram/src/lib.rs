pub mod topology;
#[cfg(test)]
mod tests;

pub use topology::{build_diagram, NODE_IDS};
