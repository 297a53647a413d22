use clap::Parser;
use contact_book::prelude::{AppError, command::Cli, run_app};

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    contact_book::logging::init_logging(cli.verbose);

    run_app(&cli.config())
}
