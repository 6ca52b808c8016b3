//! County education records and lookup by FIPS code.

mod index;
mod record;

pub use index::DatasetIndex;
pub use record::{EducationRecord, Fips};
