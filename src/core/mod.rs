pub mod enrollment;
pub mod error;
pub mod store;

pub use enrollment::Enrollment;
pub use error::{Field, Result, RosterError};
pub use store::{RosterStore, DEFAULT_ROSTER_FILE};
