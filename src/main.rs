use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use misspell_codeclimate::cli::{generate, output};
use misspell_codeclimate::report;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

const BIN_NAME: &str = "misspell-codeclimate";

#[derive(Parser, Debug)]
#[command(name = "misspell-codeclimate")]
#[command(
    version,
    about = "Turn that misspell report into a GitLab compatible codeclimate report",
    long_about = None
)]
struct Cli {
    /// Path to the misspell report to parse
    #[arg(
        short = 'f',
        long = "file",
        alias = "f",
        value_name = "PATH",
        env = "MISSPELL_REPORT"
    )]
    file: Option<PathBuf>,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the version of misspell-codeclimate
    Version {
        /// Only print the version number
        #[arg(long)]
        short: bool,
    },
    /// Generate completion script for your target shell
    #[command(long_about = generate::COMPLETION_LONG_ABOUT)]
    Completion {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
    /// Generate man pages for misspell-codeclimate
    Man,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    let colored = !cli.no_color && io::stderr().is_terminal();

    if let Err(err) = run(cli) {
        output::print_error(&err, colored);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let Some(report_path) = cli.file else {
        anyhow::bail!("No misspell report specified. Use --file <PATH> or set MISSPELL_REPORT.");
    };

    transform_report(&report_path, cli.pretty)
}

fn transform_report(report_path: &Path, pretty: bool) -> Result<()> {
    log::debug!("parsing misspell report {}", report_path.display());
    let violations = report::parse_report(report_path)?;
    log::debug!(
        "transformed {} misspelling(s) from {}",
        violations.len(),
        report_path.display()
    );

    let mut stdout = io::stdout().lock();
    output::write_report(&mut stdout, &violations, pretty)
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Version { short } => {
            if short {
                println!("{}", env!("CARGO_PKG_VERSION"));
            } else {
                println!("{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"));
            }
        }
        Commands::Completion { shell } => {
            log::debug!("generating {} completion script", shell);
            let mut cmd = Cli::command();
            generate::write_completion(shell, &mut cmd, BIN_NAME, &mut io::stdout());
        }
        Commands::Man => {
            generate::write_man_page(Cli::command(), &mut io::stdout())
                .context("Failed to generate man page")?;
        }
    }
    Ok(())
}
