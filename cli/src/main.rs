mod commands;
mod terminal;

use commands::{CommandLine, Commands, find, host, info, show};
use nettree_core::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::initialize();
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Show => {
            print::header("host inventory", cfg.quiet);
            show::show(&cfg)
        }
        Commands::Find { name } => {
            print::header("host lookup", cfg.quiet);
            find::find(&name, &cfg)
        }
        Commands::Host {
            name,
            addresses,
            components,
        } => {
            print::header("ad-hoc host", cfg.quiet);
            host::host(name, addresses, components, &cfg)
        }
    }
}
