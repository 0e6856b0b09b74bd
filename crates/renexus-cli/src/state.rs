//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the CLI commands.
//! Services are generic over the repository traits, but AppState pins them
//! to the SQLite implementations.

use std::path::PathBuf;
use std::sync::Arc;

use renexus_core::companion::CompanionEngine;
use renexus_core::guardian::{GuardianService, SimulatedResearch};
use renexus_core::service::CompanionService;
use renexus_infra::config::load_global_config;
use renexus_infra::paths;
use renexus_infra::sqlite::companion::SqliteCompanionRepository;
use renexus_infra::sqlite::conversation::SqliteConversationRepository;
use renexus_infra::sqlite::footprint::SqliteFootprintRepository;
use renexus_infra::sqlite::pool::DatabasePool;
use renexus_infra::sqlite::profile::SqliteProfileRepository;
use renexus_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to SQLite.
pub type ConcreteCompanionService =
    CompanionService<SqliteCompanionRepository, SqliteProfileRepository>;

pub type ConcreteEngine = CompanionEngine<
    SqliteCompanionRepository,
    SqliteConversationRepository,
    SqliteProfileRepository,
>;

pub type ConcreteGuardian = GuardianService<SqliteFootprintRepository, SimulatedResearch>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub companion_service: Arc<ConcreteCompanionService>,
    pub engine: Arc<ConcreteEngine>,
    pub guardian: Arc<ConcreteGuardian>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state in the default data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(paths::data_dir()).await
    }

    /// Initialize the application state in a specific data directory.
    ///
    /// The demo command uses this to run against a throwaway directory
    /// without touching the user's real companions.
    pub async fn init_at(data_dir: PathBuf) -> anyhow::Result<Self> {
        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        // Initialize database
        let db_url = format!("{}?mode=rwc", paths::database_url(&data_dir));
        let db_pool = DatabasePool::new(&db_url).await?;

        let config = load_global_config(&data_dir).await;

        let companion_service = CompanionService::new(
            SqliteCompanionRepository::new(db_pool.clone()),
            SqliteProfileRepository::new(db_pool.clone()),
        );

        let engine = CompanionEngine::new(
            SqliteCompanionRepository::new(db_pool.clone()),
            SqliteConversationRepository::new(db_pool.clone()),
            SqliteProfileRepository::new(db_pool.clone()),
            config.clone(),
        );

        let guardian = GuardianService::new(
            SqliteFootprintRepository::new(db_pool.clone()),
            SimulatedResearch,
        );

        Ok(Self {
            companion_service: Arc::new(companion_service),
            engine: Arc::new(engine),
            guardian: Arc::new(guardian),
            config,
            data_dir,
            db_pool,
        })
    }
}
