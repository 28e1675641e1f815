use clap::{Parser, ValueEnum};
use smartfood_core::domain::common::{
    CacheConfig, CacheDriver, DatabaseConfig, LLMConfig, LLMProvider, SmartfoodConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "smartfood-api", version, about = "SmartFood shopping-list API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-host",
        env = "DATABASE_HOST",
        name = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        long = "database-port",
        env = "DATABASE_PORT",
        name = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        long = "database-user",
        env = "DATABASE_USER",
        name = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        name = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(
        long = "database-name",
        env = "DATABASE_NAME",
        name = "DATABASE_NAME",
        default_value = "smartfood"
    )]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Openai,
    Gemini,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(
        long = "llm-provider",
        env = "LLM_PROVIDER",
        name = "LLM_PROVIDER",
        value_enum,
        default_value_t = LlmProviderArg::Openai
    )]
    pub provider: LlmProviderArg,

    #[arg(
        long = "llm-api-key",
        env = "LLM_API_KEY",
        name = "LLM_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub api_key: String,

    #[arg(
        long = "llm-model",
        env = "LLM_MODEL",
        name = "LLM_MODEL",
        default_value = "gpt-4o-mini"
    )]
    pub model: String,

    #[arg(
        long = "llm-base-url",
        env = "LLM_BASE_URL",
        name = "LLM_BASE_URL",
        default_value = "https://api.openai.com/v1",
        long_help = "Base URL of the OpenAI-compatible endpoint. Ignored for Gemini."
    )]
    pub base_url: String,

    #[arg(
        long = "llm-max-tokens",
        env = "LLM_MAX_TOKENS",
        name = "LLM_MAX_TOKENS",
        default_value_t = 1000
    )]
    pub max_tokens: u32,

    #[arg(
        long = "llm-temperature",
        env = "LLM_TEMPERATURE",
        name = "LLM_TEMPERATURE",
        default_value_t = 0.7
    )]
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CacheDriverArg {
    Memory,
    Postgres,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CacheArgs {
    #[arg(
        long = "cache-driver",
        env = "CACHE_DRIVER",
        name = "CACHE_DRIVER",
        value_enum,
        default_value_t = CacheDriverArg::Memory
    )]
    pub driver: CacheDriverArg,

    #[arg(
        long = "cache-ttl-seconds",
        env = "CACHE_TTL_SECONDS",
        name = "CACHE_TTL_SECONDS",
        default_value_t = 3600
    )]
    pub ttl_seconds: u64,

    #[arg(
        long = "cache-max-entries",
        env = "CACHE_MAX_ENTRIES",
        name = "CACHE_MAX_ENTRIES",
        default_value_t = 10_000
    )]
    pub max_entries: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        name = "LOG_FILTER",
        default_value = "info",
        long_help = "Used when RUST_LOG is not set"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", name = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        name = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-host",
        env = "SERVER_HOST",
        name = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        long = "server-port",
        env = "PORT",
        name = "PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "ROOT_PATH",
        name = "ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,
}

impl From<Args> for SmartfoodConfig {
    fn from(args: Args) -> Self {
        SmartfoodConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                provider: match args.llm.provider {
                    LlmProviderArg::Openai => LLMProvider::OpenAi,
                    LlmProviderArg::Gemini => LLMProvider::Gemini,
                },
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
                max_tokens: args.llm.max_tokens,
                temperature: args.llm.temperature,
            },
            cache: CacheConfig {
                driver: match args.cache.driver {
                    CacheDriverArg::Memory => CacheDriver::Memory,
                    CacheDriverArg::Postgres => CacheDriver::Postgres,
                },
                ttl_seconds: args.cache.ttl_seconds,
                max_entries: args.cache.max_entries,
            },
        }
    }
}
