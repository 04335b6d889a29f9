//! End-to-end sessions driven through scripted input.

use cmd_script::commands::{Date, Echo, Help, Ping, Uptime};
use cmd_script::{Config, Registry, ScriptedInput, Shell, Termination};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DESCRIPTIONS: [(&str, &str); 5] = [
    ("help", "Show all commands"),
    ("uptime", "Show system uptime"),
    ("date", "Show current date"),
    ("echo", "Print the passed argument"),
    ("ping", "Ping a host"),
];

/// Write a configuration file into `dir` and load it back
fn load_config(dir: &Path) -> Config {
    let mut yaml = format!(
        "debug: false\noutput: {}\nerror: {}\ndiagnostic: {}\ncommands:\n",
        dir.join("output.log").display(),
        dir.join("error.log").display(),
        dir.join("errors.log").display(),
    );
    for (name, description) in DESCRIPTIONS {
        yaml.push_str(&format!("  {}: {}\n", name, description));
    }

    let path = dir.join("cmd_script.yml");
    fs::write(&path, yaml).expect("write config");
    Config::from_yaml_file(&path).expect("load config")
}

/// Run a whole session over `lines`, returning the console output
fn session(config: &Config, registry: &Registry, lines: &[&str]) -> (Termination, String) {
    let shell = Shell::new(config, registry);
    let mut input = ScriptedInput::new(lines.iter().copied());
    let mut out = Vec::new();

    let termination = shell.run(&mut input, &mut out);
    (termination, String::from_utf8(out).expect("utf-8 console"))
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn help_lists_the_five_builtins() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());
    let registry = Registry::with_builtins(&config).unwrap();

    let (_, console) = session(&config, &registry, &["help", "exit"]);

    let listed: Vec<&str> = console.lines().filter(|l| l.contains(" --- ")).collect();
    assert_eq!(listed.len(), 5);
    for ((name, description), line) in DESCRIPTIONS.iter().zip(&listed) {
        assert_eq!(*line, format!("{} --- {}", name, description));
    }
}

#[test]
fn echo_argument_is_printed_and_logged() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());
    let registry = Registry::with_builtins(&config).unwrap();

    let (_, console) = session(&config, &registry, &["echo hello", "exit"]);
    assert!(console.contains("hello"));

    let log = read(&config.output_path);
    assert!(
        log.lines()
            .any(|l| l.contains("echo") && l.contains("hello"))
    );
}

#[test]
fn blank_lines_only_reprompt() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());
    let registry = Registry::with_builtins(&config).unwrap();

    let (termination, console) = session(&config, &registry, &["", "   ", "exit"]);

    assert_eq!(termination, Termination::Exit);
    assert_eq!(console, "Good bye!\n");
    assert!(!config.output_path.exists());
}

#[test]
fn exit_says_good_bye() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());
    let registry = Registry::with_builtins(&config).unwrap();

    let (termination, console) = session(&config, &registry, &["exit", "date"]);

    assert_eq!(termination, Termination::Exit);
    assert_eq!(console, "Good bye!\n");
}

#[test]
fn unknown_command_keeps_the_loop_going() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());
    let registry = Registry::with_builtins(&config).unwrap();

    let (termination, console) = session(&config, &registry, &["bogus", "echo still-here", "exit"]);

    assert_eq!(termination, Termination::Exit);
    assert!(console.contains("command bogus is not found"));
    assert!(console.contains("still-here"));

    let diagnostics = read(&config.diagnostic_path);
    assert_eq!(diagnostics.lines().count(), 1);
    assert!(diagnostics.contains("bogus"));
}

#[test]
fn missing_uptime_source_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());

    let mut registry = Registry::new();
    registry
        .register(Box::new(Uptime::with_source(
            config.description("uptime"),
            dir.path().join("no-uptime"),
        )))
        .unwrap();
    registry
        .register(Box::new(Echo::new(config.description("echo"))))
        .unwrap();

    let (termination, console) = session(&config, &registry, &["uptime", "echo after", "exit"]);

    assert_eq!(termination, Termination::Exit);
    assert!(console.contains("not available"));
    assert!(console.contains("Your first passed argument: after"));
}

#[test]
fn end_of_input_is_an_interrupt() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());
    let registry = Registry::with_builtins(&config).unwrap();

    let (termination, console) = session(&config, &registry, &["echo"]);

    assert_eq!(termination, Termination::Interrupted);
    assert!(console.starts_with("Hi! Put something:\n"));
    assert!(console.ends_with("Good bye!\n"));
}

#[test]
fn custom_registry_runs_in_registration_order() {
    let dir = TempDir::new().unwrap();
    let config = load_config(dir.path());

    let mut registry = Registry::new();
    registry.register(Box::new(Date::new("date"))).unwrap();
    registry.register(Box::new(Help::new("help"))).unwrap();
    registry
        .register(Box::new(Ping::with_program("ping", 1, "true")))
        .unwrap();

    let (_, console) = session(&config, &registry, &["help", "ping", "localhost", "exit"]);

    let listed: Vec<&str> = console.lines().filter(|l| l.contains(" --- ")).collect();
    assert_eq!(listed, vec!["date --- date", "help --- help", "ping --- ping"]);
    assert!(console.contains("localhost is up!"));
}
