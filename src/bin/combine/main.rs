use clap::Parser;
use filecombine::cmd_utils::NOT_ENOUGH_ARGUMENTS;
use filecombine::Combiner;
use std::path::PathBuf;

const VERSION: &str = const_format::formatcp!(
    "{}{}",
    clap::crate_version!(),
    git_version::git_version!(
        args = ["--dirty=*", "--tags", "--always"],
        fallback = "",
        prefix = " (git:",
        suffix = ")"
    )
);

#[derive(Parser, Debug)]
#[clap(name = "combine", version, long_version=VERSION, about, long_about=None)]
struct Options {
    /// Output file followed by the input files, in order
    #[clap(
        value_parser,
        value_name = "PATHS",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    paths: Vec<PathBuf>,

    /// Set verbose level. Can be specify several times to augment verbose level.
    #[clap(short, long, action=clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();
    init_logger(options.verbose);

    let Some(combiner) = Combiner::new(options.paths) else {
        println!("{NOT_ENOUGH_ARGUMENTS}");
        return Ok(());
    };

    println!("{}", combiner.summary());
    let report = combiner.run()?;
    println!("{}", report.completion());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
