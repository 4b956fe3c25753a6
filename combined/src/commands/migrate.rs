//! Migrate command - applies to both service databases.

use common::AppResult;
use pantry_service_lib::config::PantryServiceConfig;
use user_service_lib::config::UserServiceConfig;

use crate::cli::MigrateArgs;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs) -> AppResult<()> {
    let action: common::MigrateAction = args.action.into();
    tracing::info!(?action, "Running migration command");

    user_service_lib::run_migrations(&UserServiceConfig::from_env(), action).await?;
    pantry_service_lib::run_migrations(&PantryServiceConfig::from_env(), action).await?;

    Ok(())
}
