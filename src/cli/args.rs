//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// SOLID principles by example: book catalog, shapes, payroll, payments, office machines, notifications
#[derive(Parser, Debug)]
#[command(name = "solid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run practice entry points
    Run {
        /// Principle tag (srp, ocp, lsp, isp, dip) or "all"
        #[arg(default_value = "all")]
        target: String,
    },

    /// Look a book up in the sample catalog
    Library {
        /// Exact, case-sensitive title
        #[arg(short, long, default_value = "Clean Code")]
        title: String,
    },

    /// Process one payment
    Pay {
        /// Processor: credit, paypal, cash or standard
        method: String,
        /// Amount to charge
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Run one office job
    Office {
        /// Machine: basic or advanced
        machine: String,
        /// Document name
        document: String,
    },

    /// Send one notification
    Notify {
        /// Channel: email, sms or push (default: configured channel)
        #[arg(long)]
        channel: Option<String>,
        /// Message to send
        message: String,
    },

    /// Show principles and their practices
    List,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Write config template (to --config file, else the global config path)
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
