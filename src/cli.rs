use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scanboard", version, about = "Blockchain explorer dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the dashboard HTTP server
    Serve {
        /// Override bind address, e.g. 0.0.0.0:8080
        #[arg(long)]
        addr: Option<String>,
    },
    /// Fetch the analytics counts from the upstream API once and print them
    CheckUpstream,
}
