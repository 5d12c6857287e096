use crate::demo::{run_assessment_report, run_demo, DemoArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sovereignty_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cloud Sovereignty Assessor",
    about = "Run and demo the EU cloud sovereignty self-assessment from the command line",
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
    /// Work with assessment sessions without starting the server
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Run an offline demo covering scoring, seal levels, and the report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Render the plain-text report for an inline or stored session
    Report(ReportArgs),
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
        Command::Assessment {
            command: AssessmentCommand::Report(args),
        } => run_assessment_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
