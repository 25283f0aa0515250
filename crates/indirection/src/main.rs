use anyhow::Context;
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raise diagnostic verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("indirection {}", indirection::VERSION);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let locations = indirection::run(&mut out).context("cannot write locations to stdout")?;
    info!("wrote {}", locations);

    Ok(())
}
