mod commands;
mod output;

use clap::{Parser, Subcommand};
use shapeset::{entities, Resolver, ResolverOptions};
use tracing_subscriber::EnvFilter;

/// shapeset — inspect entity definitions and the selections they resolve to
#[derive(Debug, Parser)]
#[command(name = "shapeset", version, about)]
struct Cli {
    /// Output format. Auto-detected if not specified (human for terminal, json for pipe).
    #[arg(long, global = true)]
    format: Option<output::Format>,

    /// Log resolution steps to stderr (overridden by $RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Let cycles recurse until --max-depth instead of reporting them.
    #[arg(long, global = true)]
    no_cycle_check: bool,

    /// Maximum nesting of entity references.
    #[arg(long, global = true, default_value_t = ResolverOptions::default().max_depth)]
    max_depth: usize,

    /// Resolve without memoizing selections.
    #[arg(long, global = true)]
    no_memo: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            detect_cycles: !self.no_cycle_check,
            max_depth: self.max_depth,
            memoize: !self.no_memo,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every entity in the built-in table.
    Entities,
    /// Resolve one entity at a detail level.
    Resolve(commands::resolve::ResolveArgs),
    /// Build a single-item query descriptor.
    Query(commands::operation::QueryArgs),
    /// Build the find-many descriptors for an entity.
    Search(commands::operation::SearchArgs),
    /// Build a mutation descriptor.
    Mutation(commands::operation::MutationArgs),
    /// Validate and eagerly resolve the whole table.
    Check,
    /// Print a compact command reference.
    Usage,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "shapeset=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = output::resolve_format(cli.format);

    if let Command::Usage = cli.command {
        commands::usage::run();
        return;
    }

    let table = match entities::builtin() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let options = cli.resolver_options();
    tracing::debug!(entities = table.len(), ?options, "loaded definition table");
    let resolver = Resolver::with_options(table, options);

    let result = match cli.command {
        Command::Entities => commands::entities::run(&resolver, format),
        Command::Resolve(args) => commands::resolve::run(args, &resolver, format),
        Command::Query(args) => commands::operation::run_query(args, &resolver),
        Command::Search(args) => commands::operation::run_search(args, &resolver),
        Command::Mutation(args) => commands::operation::run_mutation(args, &resolver),
        Command::Check => commands::check::run(&resolver, format),
        Command::Usage => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
