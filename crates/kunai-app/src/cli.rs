use clap::{Parser, Subcommand};

/// Query iCalendar property/value type rules
#[derive(Parser, Debug)]
#[command(name = "kunai")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter, overrides `logging.level` from the configuration
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a property may carry a value type
    Check {
        /// Property name, e.g. DTSTART or X-FOO
        property: String,

        /// Value type as written in a VALUE parameter, e.g. DATE
        value: Option<String>,

        /// Fall back to the default type instead of rejecting
        #[arg(long)]
        lenient: bool,
    },

    /// Show the rules for one property
    Show {
        /// Property name
        property: String,
    },

    /// Print the whole compatibility table
    Table,
}
