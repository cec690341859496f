pub mod health;
pub mod home;
pub mod info;
pub mod not_found;

pub use health::health_handler;
pub use home::home_handler;
pub use info::info_handler;
pub use not_found::not_found_handler;

use chrono::{SecondsFormat, Utc};

/// Current instant as an RFC 3339 string with millisecond precision,
/// e.g. "2026-08-27T12:34:56.789Z".
pub(crate) fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
