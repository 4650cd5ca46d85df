use clap::Parser;

use spec_guard::cli::{Cli, Commands};
use spec_guard::commands::{run_check, run_config, run_init, run_rules};
use spec_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args, cli.color.into()),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
