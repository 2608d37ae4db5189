use serde::Serialize;
use shapeset::{Level, Resolver};
use tabled::Tabled;

use crate::output::{self, Format};

#[derive(Debug, Serialize, Tabled)]
pub struct EntityRow {
    pub name: String,
    #[tabled(rename = "root type")]
    #[serde(rename = "rootType")]
    pub root_type: String,
    pub levels: String,
    pub common: usize,
    pub full: usize,
    pub list: usize,
    pub nav: usize,
}

fn field_count(resolver: &Resolver<'_>, entity: &str, level: Level) -> anyhow::Result<usize> {
    Ok(resolver.resolve(entity, level)?.len())
}

pub fn run(resolver: &Resolver<'_>, format: Format) -> anyhow::Result<()> {
    let mut rows = Vec::new();
    for definition in resolver.table().iter() {
        let levels: Vec<&str> = definition
            .defined_levels()
            .iter()
            .map(|level| level.as_str())
            .collect();
        rows.push(EntityRow {
            name: definition.name().to_string(),
            root_type: definition.wire_type().to_string(),
            levels: if levels.is_empty() {
                "-".to_string()
            } else {
                levels.join(",")
            },
            common: definition.common_fields().map_or(0, |map| map.len()),
            full: field_count(resolver, definition.name(), Level::Full)?,
            list: field_count(resolver, definition.name(), Level::List)?,
            nav: field_count(resolver, definition.name(), Level::Nav)?,
        });
    }
    output::print_table(&rows, format)
}
