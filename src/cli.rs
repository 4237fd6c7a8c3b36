use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spotdora")]
#[command(author, version, about = "Telegram bot that downloads Spotify tracks with spotdl", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Download a single track locally, without Telegram
    Download {
        /// Spotify link
        url: String,

        /// Directory to put the mp3 in
        #[arg(short, long, default_value = ".")]
        output: String,
    },

    /// Print the spotdl version the bot would use
    CheckTool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
