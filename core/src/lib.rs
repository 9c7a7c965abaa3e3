pub mod filter;
pub mod paginate;
pub mod selection;
pub mod session;
pub mod source;
pub mod stats;
