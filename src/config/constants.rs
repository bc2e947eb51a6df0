pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const MAX_CODE_LENGTH: usize = 10_000;

pub const DEFAULT_PROVIDER: &str = "deepseek";
pub const DEFAULT_MODEL: &str = "deepseek-coder";
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_DIR_NAME: &str = ".javalyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Characters of a raw provider reply kept in log lines.
pub const LOG_PREVIEW_CHARS: usize = 500;

// Heuristic analyzer thresholds
pub const LONG_FILE_LINE_THRESHOLD: usize = 100;
pub const MAX_REPORTED_COMPLEXITY: u32 = 20;
pub const HIGH_COMPLEXITY_THRESHOLD: u32 = 10;
pub const CLEAN_SECURITY_SCORE: u32 = 95;
pub const MIN_SECURITY_SCORE: u32 = 50;
pub const CRITICAL_SECURITY_PENALTY: u32 = 20;
pub const HIGH_SECURITY_PENALTY: u32 = 10;

// HTTP endpoint
pub const MAX_REQUEST_BODY_BYTES: u64 = 256 * 1024;
pub const CORS_ALLOWED_METHODS: &[&str] = &["GET", "POST", "OPTIONS", "PUT", "PATCH", "DELETE"];
pub const CORS_ALLOWED_HEADERS: &[&str] = &[
    "x-csrf-token",
    "x-requested-with",
    "accept",
    "accept-version",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "x-api-version",
    "authorization",
    "origin",
];
