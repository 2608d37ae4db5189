use colored::Colorize;
use serde::Serialize;
use shapeset::{Selection, SelectionNode};
use std::io::IsTerminal;
use tabled::{Table, Tabled};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Human,
    Json,
}

/// Determine the output format based on the user's choice and terminal detection.
pub fn resolve_format(format: Option<Format>) -> Format {
    match format {
        Some(f) => f,
        None => {
            if std::io::stdout().is_terminal() {
                Format::Human
            } else {
                Format::Json
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(item: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

/// Print rows in the resolved format.
/// `T` must implement both `Serialize` (for JSON) and `Tabled` (for human output).
pub fn print_table<T: Serialize + Tabled>(items: &[T], format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", to_json(items)?),
        Format::Human => {
            if items.is_empty() {
                println!("No results.");
            } else {
                println!("{}", Table::new(items));
            }
        }
    }
    Ok(())
}

/// Print a single item as JSON in either format.
pub fn print_one<T: Serialize>(item: &T) -> anyhow::Result<()> {
    println!("{}", to_json(item)?);
    Ok(())
}

/// Print a selection: an indented field tree for humans, the serialized
/// node otherwise.
pub fn print_selection(node: &SelectionNode, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", to_json(node)?),
        Format::Human => {
            if node.is_empty() {
                println!("(empty selection)");
            } else {
                let mut out = String::new();
                render_tree(node, 0, &mut out);
                print!("{}", out);
            }
        }
    }
    Ok(())
}

fn render_tree(node: &SelectionNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for (name, selection) in node.iter() {
        match selection {
            Selection::Leaf => out.push_str(&format!("{indent}{name}\n")),
            Selection::Object(child) => {
                out.push_str(&format!("{indent}{name} {{\n"));
                render_tree(child, depth + 1, out);
                out.push_str(&format!("{indent}}}\n"));
            }
            Selection::Union(variants) => {
                out.push_str(&format!("{indent}{name} {{\n"));
                let inner = "  ".repeat(depth + 1);
                for (type_name, child) in variants {
                    out.push_str(&format!("{inner}... on {} {{\n", type_name.cyan()));
                    render_tree(child, depth + 2, out);
                    out.push_str(&format!("{inner}}}\n"));
                }
                out.push_str(&format!("{indent}}}\n"));
            }
        }
    }
}
