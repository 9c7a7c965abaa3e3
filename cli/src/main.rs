mod commands;
mod terminal;

use commands::{CommandLine, Commands, browse, list, stats};
use domlens_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        per_page: commands.per_page,
    };

    match commands.command {
        Commands::Browse { source, filters } => {
            print::header("interactive explorer", cfg.quiet);
            browse::browse(source, filters, &cfg).await
        }
        Commands::List { source, filters, page } => {
            print::header("filtered listing", cfg.quiet);
            list::list(source, filters, page, &cfg).await
        }
        Commands::Stats { source, filters } => {
            print::header("aggregate statistics", cfg.quiet);
            stats::stats(source, filters, &cfg).await
        }
    }
}
