//! Pantry command - listing, adding and deleting entries.

use common::AppResult;
use domain::PantryEntry;
use pantry_service_lib::config::PantryServiceConfig;
use pantry_service_lib::service::PantryService;

use super::{print_json, report};
use crate::cli::{PantryAction, PantryArgs};

/// Execute the pantry command
pub async fn execute(args: PantryArgs) -> AppResult<bool> {
    let db = pantry_service_lib::connect(&PantryServiceConfig::from_env()).await?;
    let service = pantry_service_lib::pantry_service(&db);

    match args.action {
        PantryAction::List { app_user_id } => {
            let entries = match app_user_id {
                Some(id) => service.find_by_user_id(id).await?,
                None => service.find_all().await?,
            };
            print_json(&entries)?;
            Ok(true)
        }
        PantryAction::Add {
            app_user_id,
            ingredient_id,
            measurement_id,
            quantity,
        } => {
            let entry = PantryEntry::new(app_user_id, ingredient_id, measurement_id, quantity);
            let result = service.add(Some(entry)).await?;
            report(&result)
        }
        PantryAction::Delete { pantry_id } => {
            let removed = service.delete(pantry_id).await?;
            print_json(&serde_json::json!({ "pantry_id": pantry_id, "deleted": removed }))?;
            Ok(removed)
        }
    }
}
