use clap::{Parser, Subcommand};

/// Command-line interface definition for goalbook
/// CLI application to track users and their saving goals with SQLite
#[derive(Parser)]
#[command(
    name = "goalbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small goal tracking CLI: record users and the goals they save for, backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a new user
    Add {
        #[arg(long = "first", help = "First name")]
        first_name: String,

        #[arg(long = "last", help = "Last name")]
        last_name: String,

        #[arg(long = "nick", help = "Username used for login (unique)")]
        username: String,

        #[arg(long = "password", help = "Password")]
        password: String,

        #[arg(long = "email", help = "E-mail address")]
        email: String,

        #[arg(long = "salary", help = "Monthly salary, e.g. 1850.00")]
        salary: String,
    },

    /// List all users
    List,

    /// Show one user, looked up by username
    Show {
        /// Username to look up
        username: String,
    },

    /// Update fields of an existing user
    Set {
        /// Id of the user to update
        id: i64,

        #[arg(long = "first", help = "New first name")]
        first_name: Option<String>,

        #[arg(long = "last", help = "New last name")]
        last_name: Option<String>,

        #[arg(long = "nick", help = "New username")]
        username: Option<String>,

        #[arg(long = "password", help = "New password")]
        password: Option<String>,

        #[arg(long = "email", help = "New e-mail address")]
        email: Option<String>,

        #[arg(long = "salary", help = "New monthly salary")]
        salary: Option<String>,
    },

    /// Delete a user by id (refused while the user still owns goals)
    Del {
        /// Id of the user to delete
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Record a new goal for a user
    Add {
        #[arg(long = "user", help = "Id of the owning user")]
        user: i64,

        #[arg(long = "title", help = "Short goal title")]
        title: String,

        #[arg(long = "cost", help = "Estimated cost, e.g. 450.00")]
        cost: String,

        #[arg(long = "summary", default_value = "", help = "One-line summary")]
        summary: String,

        #[arg(long = "description", default_value = "", help = "Longer description")]
        description: String,
    },

    /// List goals, all of them or one user's
    List {
        #[arg(long = "user", help = "Only goals owned by this user id")]
        user: Option<i64>,
    },

    /// Show one goal by id
    Show {
        /// Id of the goal to show
        id: i64,
    },

    /// Update fields of an existing goal
    Set {
        /// Id of the goal to update
        id: i64,

        #[arg(long = "title", help = "New title")]
        title: Option<String>,

        #[arg(long = "cost", help = "New estimated cost")]
        cost: Option<String>,

        #[arg(long = "summary", help = "New one-line summary")]
        summary: Option<String>,

        #[arg(long = "description", help = "New description")]
        description: Option<String>,
    },

    /// Delete a goal by id
    Del {
        /// Id of the goal to delete
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
