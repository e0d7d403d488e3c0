//! Command dispatch

use std::path::{Path, PathBuf};

use itertools::Itertools;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::{handle_payment, processor_for};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{Channel, MachineKind, PaymentMethod, Principle};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // config init/path must work even when the config file is missing or broken
    if let Some(Commands::Config { command }) = &cli.command {
        match command {
            ConfigCommands::Init { force } => return config_init(cli.config.as_deref(), *force),
            ConfigCommands::Path => return config_path(cli.config.as_deref()),
            ConfigCommands::Show => {}
        }
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Run { target }) => run(&container, target),
        Some(Commands::Library { title }) => library(&container, title),
        Some(Commands::Pay { method, amount }) => pay(&container, method, *amount),
        Some(Commands::Office { machine, document }) => office(&container, machine, document),
        Some(Commands::Notify { channel, message }) => {
            notify(&container, channel.as_deref(), message)
        }
        Some(Commands::List) => list(),
        Some(Commands::Config { .. }) => config_show(&container),
        // handled by main before dispatch
        Some(Commands::Completion { .. }) => Ok(()),
        None => container.practices().run_all().map_err(CliError::from),
    }
}

#[instrument(skip(container))]
fn run(container: &ServiceContainer, target: &str) -> CliResult<()> {
    let runner = container.practices();
    if target.eq_ignore_ascii_case("all") {
        return Ok(runner.run_all()?);
    }
    let principle = target.parse::<Principle>().map_err(|_| {
        CliError::InvalidArgs(format!(
            "unknown practice '{}', expected one of: {}, all",
            target,
            Principle::ALL.iter().map(|p| p.tag()).join(", ")
        ))
    })?;
    Ok(runner.run(principle)?)
}

#[instrument(skip(container))]
fn library(container: &ServiceContainer, title: &str) -> CliResult<()> {
    let library = container.library();
    debug!("catalog size: {}", library.get_total_number_of_books());
    match library.get_book_by_title(title) {
        Some(book) => output::info(&book),
        None => output::warning(&format!("no book titled '{}'", title)),
    }
    Ok(())
}

#[instrument(skip(container))]
fn pay(container: &ServiceContainer, method: &str, amount: f64) -> CliResult<()> {
    let method = method.parse::<PaymentMethod>()?;
    let processor = processor_for(method, container.console.clone());
    handle_payment(processor.as_ref(), amount);
    Ok(())
}

#[instrument(skip(container))]
fn office(container: &ServiceContainer, machine: &str, document: &str) -> CliResult<()> {
    let kind = machine.parse::<MachineKind>()?;
    let office = container.office();
    let machine = office.machine(kind);
    office.run_job(&machine, document);
    Ok(())
}

#[instrument(skip(container))]
fn notify(container: &ServiceContainer, channel: Option<&str>, message: &str) -> CliResult<()> {
    let channel = channel.map(str::parse::<Channel>).transpose()?;
    let sender = container.sender(channel)?;
    sender.send_notification(message);
    Ok(())
}

fn list() -> CliResult<()> {
    output::header(&"SOLID principles");
    let mut tree = Tree::new("solid".to_string());
    for principle in Principle::ALL {
        let practices = principle.practices().iter().map(|p| p.to_string());
        tree.push(Tree::new(principle.to_string()).with_leaves(practices));
    }
    output::info(&tree);
    Ok(())
}

fn config_show(container: &ServiceContainer) -> CliResult<()> {
    output::info(&container.settings.to_toml()?);
    Ok(())
}

fn config_target(explicit: Option<&Path>) -> CliResult<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(global_config_path)
        .ok_or_else(|| CliError::Usage("cannot determine config directory, pass --config".into()))
}

fn config_init(explicit: Option<&Path>, force: bool) -> CliResult<()> {
    let path = config_target(explicit)?;
    if path.exists() && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_failed("create config dir", parent, e))?;
    }
    std::fs::write(&path, Settings::template()).map_err(|e| io_failed("write config", &path, e))?;
    output::action("Created", &path.display());
    Ok(())
}

fn config_path(explicit: Option<&Path>) -> CliResult<()> {
    output::header(&"Config files (lowest to highest precedence)");
    match global_config_path() {
        Some(path) => output::detail(&format!(
            "global: {} ({})",
            path.display(),
            if path.exists() { "found" } else { "missing" }
        )),
        None => output::detail(&"global: <no config directory>"),
    }
    if let Some(path) = explicit {
        output::detail(&format!(
            "local:  {} ({})",
            path.display(),
            if path.exists() { "found" } else { "missing" }
        ));
    }
    output::detail(&"env:    SOLID_* (e.g. SOLID_NOTIFICATION__CHANNEL=sms)");
    Ok(())
}

fn io_failed(action: &str, path: &Path, e: std::io::Error) -> CliError {
    CliError::Application(ApplicationError::OperationFailed {
        context: format!("{}: {}", action, path.display()),
        source: Box::new(e),
    })
}
