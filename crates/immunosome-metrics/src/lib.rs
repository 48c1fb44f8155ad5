pub mod metrics;
pub mod pass;
#[cfg(test)]
mod tests;

pub use metrics::ResolutionMetrics;
pub use pass::{resolve, ResolutionPass};
