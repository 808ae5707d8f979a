//! Command implementations.

pub mod export;
pub mod extract;
pub mod get;
pub mod list;
pub mod search;

pub use self::export::execute_export;
pub use self::extract::execute_extract;
pub use self::get::execute_get;
pub use self::list::execute_list;
pub use self::search::execute_search;
