//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Household pantry and account management
#[derive(Parser, Debug)]
#[command(name = "pantry-app")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations for both services
    Migrate(MigrateArgs),

    /// Manage user accounts
    Users(UsersArgs),

    /// Manage pantry entries
    Pantry(PantryArgs),
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

impl From<MigrateAction> for common::MigrateAction {
    fn from(action: MigrateAction) -> Self {
        match action {
            MigrateAction::Up => common::MigrateAction::Up,
            MigrateAction::Down => common::MigrateAction::Down,
            MigrateAction::Status => common::MigrateAction::Status,
            MigrateAction::Fresh => common::MigrateAction::Fresh,
        }
    }
}

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List every account
    List,
    /// Show one account by ID
    Get { app_user_id: i32 },
    /// Resolve an enabled account for sign-in
    Lookup { username: String },
    /// Register a new account
    Create { username: String, password: String },
}

#[derive(Args, Debug)]
pub struct PantryArgs {
    #[command(subcommand)]
    pub action: PantryAction,
}

#[derive(Subcommand, Debug)]
pub enum PantryAction {
    /// List pantry entries, optionally for one user
    List {
        #[arg(long = "user")]
        app_user_id: Option<i32>,
    },
    /// Add an ingredient quantity to a user's pantry
    Add {
        #[arg(long = "user")]
        app_user_id: i32,
        #[arg(long = "ingredient", allow_negative_numbers = true)]
        ingredient_id: i32,
        #[arg(long = "measurement", allow_negative_numbers = true)]
        measurement_id: i32,
        #[arg(long, allow_negative_numbers = true)]
        quantity: f64,
    },
    /// Delete a pantry entry
    Delete { pantry_id: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pantry_add() {
        let cli = Cli::try_parse_from([
            "pantry-app",
            "pantry",
            "add",
            "--user",
            "7",
            "--ingredient",
            "2",
            "--measurement",
            "1",
            "--quantity",
            "-5",
        ])
        .unwrap();

        match cli.command {
            Commands::Pantry(PantryArgs {
                action:
                    PantryAction::Add {
                        app_user_id,
                        quantity,
                        ..
                    },
            }) => {
                assert_eq!(app_user_id, 7);
                assert_eq!(quantity, -5.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_verbose_and_migrate() {
        let cli = Cli::try_parse_from(["pantry-app", "migrate", "status", "-v"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }

    #[test]
    fn test_users_create_requires_password() {
        assert!(Cli::try_parse_from(["pantry-app", "users", "create", "a@b.c"]).is_err());
    }
}
