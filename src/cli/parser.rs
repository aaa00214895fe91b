use clap::{Parser, Subcommand};

/// Command-line interface definition for specbook
#[derive(Parser)]
#[command(
    name = "specbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage construction interior specification sheets: projects, spec entry and PDF output",
    long_about = None
)]
pub struct Cli {
    /// Override the workbook path (useful for tests or custom stores)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this registered email instead of the configured operator
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Override the output root where project folders live
    #[arg(global = true, long = "out")]
    pub out: Option<String>,

    /// Override the placeholder template document
    #[arg(global = true, long = "template")]
    pub template: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workbook, configuration and default template
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Maintain the user directory sheet
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Create a new project
    New {
        /// Customer name
        customer: String,
        /// Project name
        project: String,
        /// Lot number
        lot: String,
        /// Assigned staff member
        assignee: String,
    },

    /// List projects, optionally filtered
    List {
        #[arg(long, help = "Exact assignee match")]
        assignee: Option<String>,

        #[arg(long = "customer", help = "Customer name substring match")]
        customer: Option<String>,

        #[arg(long, help = "Status code: meeting, specified or complete")]
        status: Option<String>,

        #[arg(long, help = "Exact department match")]
        department: Option<String>,
    },

    /// Show one project in detail
    Show {
        /// Project id (PRJ + YYMMDDHHmm)
        id: String,
    },

    /// Read or save a project's specification data
    Spec {
        #[command(subcommand)]
        action: SpecAction,
    },

    /// Print a starter template dataset by type
    Template {
        /// Template type (sheet suffix)
        name: String,
    },

    /// Print the master picklist of a category
    Master {
        /// Category (sheet prefix)
        category: String,
    },

    /// Generate the specification sheet PDF for a project
    Pdf {
        /// Project id
        id: String,
    },

    /// Print the change history of a project, most recent first
    History {
        /// Project id
        id: String,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a staff member in the directory
    Add {
        name: String,
        email: String,
        department: String,
        role: String,
    },

    /// List registered staff
    List,
}

#[derive(Subcommand)]
pub enum SpecAction {
    /// Print both category datasets as JSON
    Get {
        /// Project id
        id: String,
    },

    /// Replace the submitted categories from a JSON payload file
    Save {
        /// Project id
        id: String,

        #[arg(long = "file", help = "JSON file with {design?: [...], interior?: [...]}")]
        file: String,
    },
}
