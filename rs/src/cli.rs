//! CLI argument parsing for rowstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rs")]
#[command(author, version, about = "Flat-file line-record store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new row to a record file
    Add {
        /// Logical key, segments separated by '-'
        key: String,

        /// Row content to store
        row: String,
    },

    /// Retrieve rows with pagination, sorted
    Get {
        /// Logical key
        key: String,

        /// 1-based page number
        #[arg(default_value = "1")]
        page: usize,

        /// Number of rows per page
        #[arg(short, long, default_value = "10")]
        quantity: usize,

        /// Sort in ascending order
        #[arg(short, long)]
        asc: bool,
    },

    /// Retrieve a row by its 1-based index in file order
    GetIndex {
        /// Logical key
        key: String,

        /// 1-based row index
        index: usize,
    },

    /// Delete the first row containing the term
    DeleteByTerm {
        /// Logical key
        key: String,

        /// Case-insensitive search term
        term: String,
    },

    /// Delete a row by its 1-based index
    DeleteByIndex {
        /// Logical key
        key: String,

        /// 1-based row index
        index: usize,
    },

    /// Update a row by its 1-based index
    UpdateByIndex {
        /// Logical key
        key: String,

        /// 1-based row index
        index: usize,

        /// Replacement row content
        row: String,
    },

    /// Update the first row containing the term
    UpdateByTerm {
        /// Logical key
        key: String,

        /// Case-insensitive search term
        term: String,

        /// Replacement row content
        row: String,
    },
}
