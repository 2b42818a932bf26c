//! Command dispatch: turns parsed arguments into service calls and output.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{
    level_range, ApplicationError, IoResultExt, TreeReport, TreeRequest, TreeService,
};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::{format_sequence, Graph, Order, Traversals, TreeArena, TreeRender};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    let service = TreeService::new();
    match &cli.command {
        Some(Commands::Build { shape, format }) => {
            let format = format.unwrap_or(settings.format);
            cmd_build(&service, &(*shape).into(), format)
        }
        Some(Commands::Traverse { shape, order }) => {
            let orders = if order.is_empty() {
                settings.orders.as_slice()
            } else {
                order.as_slice()
            };
            cmd_traverse(&service, &(*shape).into(), orders)
        }
        Some(Commands::Show { shape }) => cmd_show(&service, &(*shape).into(), &settings.orders),
        Some(Commands::Graph { shape, output }) => {
            cmd_graph(&service, &(*shape).into(), output.as_deref())
        }
        Some(Commands::Config { command }) => cmd_config(command, settings),
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

#[instrument(skip(service))]
fn cmd_build(service: &TreeService, request: &TreeRequest, format: OutputFormat) -> CliResult<()> {
    let tree = service.generate(request)?;
    print_tree(&tree, format)
}

#[instrument(skip(service))]
fn cmd_traverse(service: &TreeService, request: &TreeRequest, orders: &[Order]) -> CliResult<()> {
    let traversals = service.traverse(request)?;
    print_traversals(&traversals, orders);
    Ok(())
}

#[instrument(skip(service))]
fn cmd_show(service: &TreeService, request: &TreeRequest, orders: &[Order]) -> CliResult<()> {
    let report = service.report(request)?;
    print_report(&report, orders);
    Ok(())
}

#[instrument(skip(service))]
fn cmd_graph(service: &TreeService, request: &TreeRequest, output: Option<&Path>) -> CliResult<()> {
    let graph = service.graph(request)?;
    let json = graph_json(&graph)?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n").with_path_context("write graph", path)?;
            output::success(&format!("graph written to {}", path.display()));
        }
        None => output::info(&json),
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "" } else { " (not present)" };
                output::info(&format!("{}{}", path.display(), state));
            }
            None => output::hint("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    debug!("generating completion for {shell:?}");
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn graph_json(graph: &Graph) -> CliResult<String> {
    Ok(graph.to_json().map_err(ApplicationError::from)?)
}

fn print_tree(tree: &TreeArena, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Tree => output::info(&tree.to_termtree()),
        OutputFormat::Map => output::info(tree),
        OutputFormat::Json => output::info(&graph_json(&Graph::from_tree(tree))?),
    }
    Ok(())
}

fn print_traversals(traversals: &Traversals, orders: &[Order]) {
    for &order in orders {
        output::sequence(order.title(), &format_sequence(traversals.get(order)));
    }
}

fn print_report(report: &TreeReport, orders: &[Order]) {
    let request = report.request;
    output::header(&format!(
        "{} levels, {} nodes ({} layout)",
        request.levels, request.nodes, report.layout
    ));
    output::info(&report.tree.to_termtree());
    if !report.fits_level_range && report.tree.depth() < request.levels as usize {
        if let Some(range) = level_range(request.levels) {
            output::hint(&format!(
                "{} nodes fill {} of {} levels; {}-{} nodes populate every level",
                request.nodes,
                report.tree.depth(),
                request.levels,
                range.start(),
                range.end()
            ));
        }
    }
    print_traversals(&report.traversals, orders);
}
