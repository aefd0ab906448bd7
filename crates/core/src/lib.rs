pub mod config;
pub mod date;
pub mod error;
pub mod extract;
pub mod record;
pub mod store;

pub use config::Config;
pub use date::YearMonth;
pub use error::*;
pub use extract::*;
pub use record::*;
pub use store::RecordStore;
