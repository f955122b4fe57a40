pub mod fees;
pub mod rates;
pub mod schema;

pub use fees::{parse_fee_assignment, FeeEntry, FeeParseError, FeeRegistry};
pub use rates::RateTable;
pub use schema::{Material, MaterialParseError, Origin, OriginParseError};
