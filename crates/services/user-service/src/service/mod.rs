//! Account use cases.

mod user_service;

pub use user_service::{AppUserManager, AppUserService, AuthenticationLookup};
