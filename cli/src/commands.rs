pub mod find;
pub mod host;
pub mod info;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};
use nettree_core::inventory::component::Component;

#[derive(Parser)]
#[command(name = "nettree")]
#[command(about = "Renders a host inventory as an ASCII tree.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Drop the chrome; repeat to also drop rendered trees
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about the tool
    #[command(alias = "i")]
    Info,
    /// Render the built-in demo inventory
    #[command(alias = "s")]
    Show,
    /// Look a host up by name in the demo inventory
    #[command(alias = "f")]
    Find { name: String },
    /// Assemble a host from the command line and render it
    #[command(alias = "h")]
    Host {
        name: String,
        /// Network address; repeatable
        #[arg(long = "addr")]
        addresses: Vec<String>,
        /// Component in compact form (cpu:4@2500, mem:16000,
        /// disk:hdd:2000:500=system,1500=data); repeatable
        #[arg(long = "component")]
        components: Vec<Component>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
