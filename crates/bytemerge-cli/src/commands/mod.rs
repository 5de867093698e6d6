use crate::commands::train::TrainArgs;

pub mod train;

/// Subcommands for bytemerge
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a byte-level BPE vocabulary.
    Train(TrainArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
        }
    }
}
