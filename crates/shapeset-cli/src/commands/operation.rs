use clap::Args;
use shapeset::{Level, Resolver};

use crate::output;

/// Build a single-item query descriptor.
///
/// Examples:
///   shapeset query Api --name api --input ApiWhereUniqueInput
#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Entity name.
    pub entity: String,
    /// Operation name.
    #[arg(long)]
    pub name: String,
    /// Declared input type of the operation's variables.
    #[arg(long)]
    pub input: Option<String>,
    /// Detail level: full, list, or nav.
    #[arg(long, default_value = "full")]
    pub level: Level,
}

/// Build the find-many descriptors for an entity.
///
/// Examples:
///   shapeset search Api --name apis --input ApiFilter
///   shapeset search Api --name apis --input ApiFilter --level list
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Entity name.
    pub entity: String,
    /// Operation name.
    #[arg(long)]
    pub name: String,
    /// Declared input type of the operation's variables.
    #[arg(long)]
    pub input: String,
    /// Only print the descriptor for this level.
    #[arg(long)]
    pub level: Option<Level>,
}

/// Build a mutation descriptor.
///
/// Examples:
///   shapeset mutation --name createComment --input CommentCreateInput --entity Comment
///   shapeset mutation --name signOut
#[derive(Debug, Args)]
pub struct MutationArgs {
    /// Operation name.
    #[arg(long)]
    pub name: String,
    /// Declared input type of the operation's variables.
    #[arg(long)]
    pub input: Option<String>,
    /// Payload entity. Omit for mutations that return nothing.
    #[arg(long)]
    pub entity: Option<String>,
    /// Payload detail level.
    #[arg(long, default_value = "full", requires = "entity")]
    pub level: Level,
}

pub fn run_query(args: QueryArgs, resolver: &Resolver<'_>) -> anyhow::Result<()> {
    let op = resolver.to_query(&args.name, args.input.as_deref(), &args.entity, args.level)?;
    output::print_one(&op)
}

pub fn run_search(args: SearchArgs, resolver: &Resolver<'_>) -> anyhow::Result<()> {
    match args.level {
        Some(level) => {
            let op = resolver.to_search_at(&args.name, &args.input, &args.entity, level)?;
            output::print_one(&op)
        }
        None => {
            let ops = resolver.to_search(&args.name, &args.input, &args.entity)?;
            output::print_one(&ops)
        }
    }
}

pub fn run_mutation(args: MutationArgs, resolver: &Resolver<'_>) -> anyhow::Result<()> {
    let payload = args.entity.as_deref().map(|entity| (entity, args.level));
    let op = resolver.to_mutation(&args.name, args.input.as_deref(), payload)?;
    output::print_one(&op)
}
