use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::{error, info};
use sql2dbml::{
    cli::{CliApp, OutputFile, DEFAULT_OUTPUT},
    sql::session::check_input_path,
    util::{level_for_verbosity, SimpleLogger},
    ConvertError, Converter,
};

static LOGGER: SimpleLogger = SimpleLogger;

/// Convert SQL table definitions into a DBML schema.
#[derive(Parser)]
#[command(name = "sql2dbml", version, about, long_about = None)]
struct Args {
    /// Source file, must have a .sql extension
    input: PathBuf,

    /// Target file, `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), ConvertError> {
    check_input_path(&args.input)?;
    let input = BufReader::new(File::open(&args.input)?);

    if args.output == "-" {
        CliApp::new(Converter::new(), input, io::stdout().lock()).run()
    } else {
        CliApp::new(Converter::new(), input, OutputFile::new(&args.output)).run()?;
        info!("Wrote {}", args.output);
        Ok(())
    }
}

pub fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) =
        log::set_logger(&LOGGER).map(|()| log::set_max_level(level_for_verbosity(args.verbose)))
    {
        eprintln!("failed to install logger: {}", e);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
