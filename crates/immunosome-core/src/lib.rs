pub mod diagram;
pub mod error;
pub mod lookup;
pub mod report;
pub mod selection;

pub use diagram::*;
pub use error::*;
pub use lookup::*;
pub use report::*;
pub use selection::*;
