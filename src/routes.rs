// Route path constants - single source of truth for all API paths

pub const HOME: &str = "/";
pub const HEALTH: &str = "/health";
pub const API_INFO: &str = "/api/info";
