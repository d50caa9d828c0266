// Default URLs
pub static DEFAULT_BASE_URL: &str = "https://api.withmono.com";

// Header names
pub static MONO_SEC_KEY_HEADER: &str = "mono-sec-key";
pub static SESSION_ID_HEADER: &str = "x-session-id";
