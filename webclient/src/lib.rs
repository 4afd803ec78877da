// exported modules
pub mod error;
pub mod model;

// client impls
pub mod warenbuchung;

// re-exports
pub use error::*;
pub use model::*;
pub use warenbuchung::WarenbuchungClient;

// internal modules
mod util;
