//! Account service tests against an in-memory SQLite database.

use common::{AppError, DatabaseConfig};
use domain::{MSG_PASSWORD_WEAK, MSG_USERNAME_TAKEN, ROLE_USER};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::service::{AppUserService, AuthenticationLookup};

fn memory_config() -> UserServiceConfig {
    UserServiceConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
    }
}

#[tokio::test]
async fn test_register_then_lookup() {
    let db = user_service_lib::connect(&memory_config()).await.unwrap();
    let service = user_service_lib::account_service(&db);

    let result = service
        .create(Some("cook@example.com"), Some("abcd123!"))
        .await
        .unwrap();
    assert!(result.is_success());
    let created = result.into_payload().unwrap();
    assert!(created.app_user_id > 0);
    assert_ne!(created.password_hash, "abcd123!");
    assert_eq!(created.roles, vec![ROLE_USER.to_string()]);

    let found = service.authentication_lookup("cook@example.com").await.unwrap();
    assert_eq!(found.app_user_id, created.app_user_id);

    let by_id = service.find_by_user_id(created.app_user_id).await.unwrap();
    assert_eq!(by_id.map(|u| u.username), Some("cook@example.com".to_string()));
}

#[tokio::test]
async fn test_duplicate_username_is_reported() {
    let db = user_service_lib::connect(&memory_config()).await.unwrap();
    let service = user_service_lib::account_service(&db);

    let first = service
        .create(Some("dup@example.com"), Some("abcd123!"))
        .await
        .unwrap();
    assert!(first.is_success());

    let second = service
        .create(Some("dup@example.com"), Some("other456?"))
        .await
        .unwrap();
    assert!(!second.is_success());
    assert!(second.payload().is_none());
    assert_eq!(second.messages().len(), 1);
    assert_eq!(second.messages()[0].message, MSG_USERNAME_TAKEN);

    assert_eq!(service.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_registration_stores_nothing() {
    let db = user_service_lib::connect(&memory_config()).await.unwrap();
    let service = user_service_lib::account_service(&db);

    let result = service
        .create(Some("weak@example.com"), Some("password"))
        .await
        .unwrap();

    assert_eq!(result.messages()[0].message, MSG_PASSWORD_WEAK);
    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_lookup_unknown_account() {
    let db = user_service_lib::connect(&memory_config()).await.unwrap();
    let service = user_service_lib::account_service(&db);

    let result = service.authentication_lookup("ghost@example.com").await;

    assert!(matches!(result, Err(AppError::NotFound)));
}
