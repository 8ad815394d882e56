pub mod actions;
pub mod errors;
pub mod id;
pub mod notifications;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, LawyerError, PlatformError};
pub use id::{new_correlation_id, SessionId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{ChatRole, Color, UploadKind};

pub type Result<T> = std::result::Result<T, LawyerError>;
