use clap::Parser;
use hoptrace::{Cli, Failure, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    let format = cli.format;

    if let Err(e) = run(cli) {
        let failure = Failure::from_error(&e);
        failure.report(format);
        std::process::exit(failure.exit_code());
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
