mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, demo, report, schedule};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg)?;
    print::banner(&cfg);

    match commands.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            print::header("clinic design patterns", &cfg);
            demo::demo(&cfg);
        }
        Commands::Check => {
            print::header("running self-checks", &cfg);
            check::check(&cfg)?;
        }
        Commands::Report { kind } => {
            print::header("report", &cfg);
            report::report(kind);
        }
        Commands::Schedule { with } => {
            print::header("scheduling", &cfg);
            schedule::schedule(&with, &cfg);
        }
    }

    print::end_of_program(&cfg);
    Ok(())
}
