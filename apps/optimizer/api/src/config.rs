use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use domain_analysis::LlmConfig;
use domain_snippets::{EmbeddingConfig, QdrantConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub qdrant: QdrantConfig,
    pub embedding: EmbeddingConfig,
    pub llm: LlmConfig,
    pub collection_name: String,
    /// Drop and recreate the snippet collection on startup, discarding all
    /// stored snippets. Off by default; opt in with COLLECTION_RECREATE=true.
    pub collection_recreate: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let qdrant = QdrantConfig::from_env();
        let embedding = EmbeddingConfig::from_env()?;
        let llm = LlmConfig::from_env()?; // Required - fails without LLM_API_KEY

        let collection_name = env_or_default("COLLECTION_NAME", "optimized_code_snippets");
        let collection_recreate = env_or_default("COLLECTION_RECREATE", "false")
            .eq_ignore_ascii_case("true");

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            qdrant,
            embedding,
            llm,
            collection_name,
            collection_recreate,
        })
    }
}
