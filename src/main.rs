//! templateapp - TextFSM Template Builder

use anyhow::Result;
use clap::Parser;

use templateapp::cli::actions::{self, build::BuildOptions};
use templateapp::cli::{Cli, Commands, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    let result = match cli.command {
        Commands::Statement { lines } => actions::statement::execute(&ctx, &lines),
        Commands::Build {
            file,
            output,
            author,
            email,
            company,
            description,
            no_header,
            yes,
        } => {
            let options = BuildOptions {
                file,
                output,
                author,
                email,
                company,
                description,
                no_header,
                yes,
            };
            actions::build::execute(&ctx, &options)
        }
        Commands::Dependency => actions::dependency::execute(&ctx),
        Commands::Config { init } => actions::config::execute(&ctx, init),
    };

    if let Err(err) = result {
        ctx.print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
    Ok(())
}
