use bumpy_runner::bumpy::BumpyRunner;
use bumpy_runner::cli::args::Args;
use bumpy_runner::cli::commands;
use bumpy_runner::tool::ToolError;
use bumpy_runner::{config, constants};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let (config, source) =
        config::load(args.config.as_deref()).wrap_err(constants::CLI_MSG_CONFIG_LOAD_FAILED)?;
    init_tracing(args.verbose, config.log_level.as_deref())?;
    tracing::debug!(?source, version = constants::APP_VERSION, "{} starting", constants::APP_NAME);

    if args.print_args {
        for token in commands::planned_arguments(&args, &config) {
            println!("{token}");
        }
        return Ok(());
    }

    let bumpy = BumpyRunner::new(commands::resolve_tool_runner(&args, &config));
    match commands::execute(&bumpy, &args, &config) {
        Ok(()) => Ok(()),
        // Mirror bumpy's exit code so scripts can branch on it.
        Err(err @ ToolError::NonZeroExit { code, .. }) => {
            eprintln!("{err}");
            std::process::exit(code);
        }
        Err(err) => Err(err).wrap_err(constants::CLI_MSG_TOOL_FAILED),
    }
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_tracing(verbose: u8, configured: Option<&str>) -> Result<()> {
    let filter = if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        let level = match verbose {
            0 => configured.unwrap_or(constants::DEFAULT_LOG_LEVEL),
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).wrap_err_with(|| format!("invalid log level: {level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
