pub mod query;
pub mod stations;

pub use query::query;
pub use stations::stations;
