use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::DEFAULT_DB_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-list", version, about = "Simple Contact List")]
pub struct Cli {
    /// Storage choice (sqlite, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("sqlite"))]
    pub storage_choice: String,

    /// Path of the SQLite database file
    #[arg(long, env = "CONTACTS_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    /// At least one of name, phone or email is required
    Add {
        /// Contact name
        #[arg(long)]
        name: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// List all contacts
    List,
    /// Show a single contact
    Show {
        /// Contact id as shown by `list`
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Edit the data of an existing contact
    /// Fields that are not given keep their current value
    Edit {
        /// Contact id as shown by `list`
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id as shown by `list`
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },

    /// Export contacts to a .csv or .json file
    Export {
        /// Destination file, or a directory to write exported.csv into
        #[arg(short, long)]
        des: PathBuf,
    },
}
