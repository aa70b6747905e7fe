pub mod log_store;
pub mod session_file;

pub use log_store::{LogStore, Records};
pub use session_file::SessionFile;
