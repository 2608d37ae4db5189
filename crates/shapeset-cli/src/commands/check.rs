use colored::Colorize;
use serde::Serialize;
use shapeset::Resolver;
use tabled::Tabled;

use crate::output::{self, Format};

#[derive(Debug, Serialize, Tabled)]
pub struct CheckRow {
    pub entity: String,
    pub level: String,
    pub defined: bool,
    pub fields: String,
    pub leaves: String,
    pub depth: String,
    pub error: String,
}

pub fn run(resolver: &Resolver<'_>, format: Format) -> anyhow::Result<()> {
    let report = resolver.check_all();

    let rows: Vec<CheckRow> = report
        .entries
        .iter()
        .map(|entry| {
            let (fields, leaves, depth, error) = match &entry.outcome {
                Ok(stats) => (
                    stats.fields.to_string(),
                    stats.leaves.to_string(),
                    stats.depth.to_string(),
                    String::new(),
                ),
                Err(e) => (String::new(), String::new(), String::new(), e.to_string()),
            };
            CheckRow {
                entity: entry.entity.clone(),
                level: entry.level.to_string(),
                defined: entry.defined,
                fields,
                leaves,
                depth,
                error,
            }
        })
        .collect();
    output::print_table(&rows, format)?;

    for err in &report.validation {
        eprintln!("{} {}", "invalid:".red(), err);
    }
    if !report.is_ok() {
        return Err(anyhow::anyhow!(
            "{} problem(s) in {} entities",
            report.failure_count(),
            resolver.table().len()
        ));
    }
    if format == Format::Human {
        println!(
            "{}",
            format!(
                "All {} entities resolve at every level.",
                resolver.table().len()
            )
            .green()
        );
    }
    Ok(())
}
