pub mod category;
pub mod record;
pub mod session;

pub use category::Category;
pub use record::{LOG_HEADER, LogRecord};
pub use session::{Session, SessionKey};
