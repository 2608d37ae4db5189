use clap::Args;
use shapeset::{Level, Resolver};

use crate::output::{self, Format};

/// Resolve one entity at a detail level.
///
/// Examples:
///   shapeset resolve Comment
///   shapeset resolve Organization --level list --omit roles
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Entity name (see `shapeset entities`).
    pub entity: String,
    /// Detail level: full, list, or nav.
    #[arg(long, default_value = "full")]
    pub level: Level,
    /// Comma-separated top-level fields to leave out.
    #[arg(long, value_delimiter = ',')]
    pub omit: Vec<String>,
}

pub fn run(args: ResolveArgs, resolver: &Resolver<'_>, format: Format) -> anyhow::Result<()> {
    let node = resolver.resolve_omitting(&args.entity, args.level, args.omit)?;
    output::print_selection(&node, format)
}
