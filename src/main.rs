use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use radar::{Charge, RadarError};

#[derive(Parser, Debug)]
#[command(name = "radar", version, about = "Decide whether a charge is accepted by its ALLOW/BLOCK rules")]
struct Args {
    /// File of directives, one per line. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Print the allow/block breakdown to stderr
    #[arg(long)]
    explain: bool,

    /// Log verbosity; `RUST_LOG` takes precedence
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

fn load(file: Option<&PathBuf>) -> Result<Charge, RadarError> {
    match file {
        Some(path) => Charge::from_file(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(Charge::from_text(&input)?)
        }
    }
}

fn main() -> Result<(), RadarError> {
    let args = Args::parse();
    init_logging(args.log_level);

    let charge = load(args.file.as_ref())?;
    if args.explain {
        eprintln!("{}", charge.policy());
        eprintln!("{}", charge.evaluate_detailed());
    }
    println!("{}", charge.decide().code());
    Ok(())
}
