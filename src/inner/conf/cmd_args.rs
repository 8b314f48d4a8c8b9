use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"Conversions between a BLE host stack and a plugin boundary
"###
)]
pub struct AppConf {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Expand UUIDs and short aliases into canonical 128-bit UUIDs
    Normalize {
        /// 16-bit (4 hex digits), 32-bit (8 hex digits) or full UUIDs
        #[arg(required = true)]
        uuids: Vec<String>,

        /// Report each invalid UUID separately instead of failing the whole batch
        #[arg(long)]
        each: bool,
    },

    /// Print the short alias of UUIDs built on the Bluetooth Base UUID
    Alias {
        #[arg(required = true)]
        uuids: Vec<String>,
    },

    /// Serialize a characteristic response document (YAML or JSON) into its JSON payload
    Serialize {
        /// A file with the response document
        #[arg(long)]
        input: PathBuf,

        /// The document is a multi characteristics response
        #[arg(long)]
        multi: bool,

        /// Pretty print the payload
        #[arg(long)]
        pretty: bool,
    },
}
