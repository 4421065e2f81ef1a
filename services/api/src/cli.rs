use crate::demo::{run_check, run_demo, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ghosthire::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GhostHire",
    about = "Privacy-preserving job applications: serve the API or check eligibility locally",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assemble an eligibility claim from JSON profile and job files
    Check(CheckArgs),
    /// Walk through an eligible and an ineligible application end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["ghosthire"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::try_parse_from([
            "ghosthire",
            "check",
            "--profile",
            "profile.json",
            "--job",
            "job.json",
            "--job-id",
            "7",
            "--reveal-salary",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.job_id, 7);
                assert!(args.reveal_salary);
                assert!(!args.reveal_location);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }
}
