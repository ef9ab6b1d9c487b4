//! app-config - entry point

use clap::Parser;

use common::{logging, settings};
use config_cli::{commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Show(args) => commands::load(cli.env_file.as_deref())
            .and_then(settings::init)
            .and_then(|settings| commands::show(settings, args.pretty)),
        Commands::Defaults(args) => commands::defaults(args.pretty),
    };

    match result {
        Ok(out) => println!("{}", out),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            std::process::exit(1);
        }
    }
}
