pub mod executor;

pub use executor::VenvExecutor;
