pub mod api;
pub mod apply;
pub mod config;
pub mod errors;
pub mod layout;
pub mod preview;
pub mod source;
pub mod transactions;
pub mod vfs;

pub use api::{prepare_assets, IconPrepError, PrepareOptions};
