use clap::Parser;

use quarry::cli::Cli;

mod cmd_search;

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too; only real argument
            // errors use stderr and exit 1.
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                std::process::ExitCode::from(1)
            } else {
                std::process::ExitCode::SUCCESS
            };
        }
    };

    match cmd_search::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::ExitCode::from(1)
        }
    }
}
