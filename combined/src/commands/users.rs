//! Users command - account listing, lookup and registration.

use common::{AppResult, OptionExt};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::service::{AppUserService, AuthenticationLookup};

use super::{print_json, report};
use crate::cli::{UsersAction, UsersArgs};

/// Execute the users command
pub async fn execute(args: UsersArgs) -> AppResult<bool> {
    let db = user_service_lib::connect(&UserServiceConfig::from_env()).await?;
    let service = user_service_lib::account_service(&db);

    match args.action {
        UsersAction::List => {
            print_json(&service.find_all().await?)?;
            Ok(true)
        }
        UsersAction::Get { app_user_id } => {
            let user = service.find_by_user_id(app_user_id).await?.ok_or_not_found()?;
            print_json(&user)?;
            Ok(true)
        }
        UsersAction::Lookup { username } => {
            print_json(&service.authentication_lookup(&username).await?)?;
            Ok(true)
        }
        UsersAction::Create { username, password } => {
            let result = service.create(Some(&username), Some(&password)).await?;
            report(&result)
        }
    }
}
