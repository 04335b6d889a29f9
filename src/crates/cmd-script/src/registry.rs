use crate::commands::{Command, Date, Echo, Help, Ping, Uptime};
use crate::config::Config;
use cmd_script_error::{Result, ShellError};

/// Ordered collection of the commands known to the shell
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in commands, in help order
    pub fn with_builtins(config: &Config) -> Result<Self> {
        let mut registry = Self::new();

        registry.register(Box::new(Help::new(config.description("help"))))?;
        registry.register(Box::new(Uptime::new(config.description("uptime"))))?;
        registry.register(Box::new(Date::new(config.description("date"))))?;
        registry.register(Box::new(Echo::new(config.description("echo"))))?;
        registry.register(Box::new(Ping::new(
            config.description("ping"),
            config.ping_count,
        )))?;

        Ok(registry)
    }

    /// Append a command; names must be unique
    pub fn register(&mut self, command: Box<dyn Command>) -> Result<()> {
        if self.commands.iter().any(|c| c.name() == command.name()) {
            return Err(ShellError::DuplicateCommand(command.name().to_string()));
        }

        self.commands.push(command);
        Ok(())
    }

    /// Find a command by its exact name
    pub fn lookup(&self, name: &str) -> Result<&dyn Command> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| &**c)
            .ok_or_else(|| ShellError::CommandNotFound(name.to_string()))
    }

    /// Iterate over all commands in registration order
    pub fn all(&self) -> impl Iterator<Item = &dyn Command> + Clone + '_ {
        self.commands.iter().map(|c| &**c)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
