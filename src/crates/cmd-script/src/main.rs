use cmd_script::cli::CliArgs;
use cmd_script::{Config, FAREWELL, Registry, Shell, ShellError, Terminal};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();
}

fn run() -> Result<(), ShellError> {
    let args = CliArgs::from_env();
    let config_path = args.config_path();
    let config = Config::from_yaml_file(&config_path)?;

    init_logging(config.debug);
    info!(config = %config_path.display(), "configuration loaded");

    // Ctrl-C at the prompt is handled by the line editor; this covers
    // signals delivered while a command is running.
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n{}", FAREWELL);
        std::process::exit(0);
    }) {
        warn!(error = %e, "failed to install interrupt handler");
    }

    let registry = Registry::with_builtins(&config)?;
    let shell = Shell::new(&config, &registry);

    let mut terminal = Terminal::new(config.history.clone())?;
    let mut stdout = std::io::stdout();
    shell.run(&mut terminal, &mut stdout);
    terminal.save_history();

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
