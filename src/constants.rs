pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const USER_ROLE: &str = "user";
pub const HAIKU_PROMPT: &str = "write a haiku about ai";
pub const STORE_COMPLETION: bool = true;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_ORG_ID: &str = "OPENAI_ORG_ID";
pub const ENV_PROJECT_ID: &str = "OPENAI_PROJECT_ID";
pub const ENV_TIMEOUT_SECS: &str = "OPENAI_TIMEOUT_SECS";

// Header names must stay lowercase for `HeaderName::from_static`.
pub const ORGANIZATION_HEADER: &str = "openai-organization";
pub const PROJECT_HEADER: &str = "openai-project";
