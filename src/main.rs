use appender::runtime;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let _cli = Cli::parse();
    runtime::run()
}

#[derive(Parser)]
#[command(name = "appender")]
#[command(version, about = "Append CHLOS to ./test.txt")]
struct Cli {
    /// Accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}
