//! sprig CLI - branch queries and creation for build scripts.

use clap::Parser;

mod commands;
mod output;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Current { repo, json } => commands::current::run(&repo, json),
        Commands::Create {
            name,
            repo,
            checkout,
            json,
        } => commands::create::run(&name, &repo, checkout, json),
        Commands::Branches { repo, json } => commands::branches::run(&repo, json),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
