use clap::Parser;
use gostudy::App;
use gostudy::cli::Cli;
use gostudy::terminal::StdConsole;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut app = App::new(StdConsole::stdio());
    if let Err(e) = app.run(cli.command) {
        debug!(error = ?e, "command failed");
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize logging: {}", e);
    }
}
