pub mod derive;
pub mod scheme;
pub mod size;

pub use derive::generate;
pub use scheme::Scheme;
pub use size::Size;
