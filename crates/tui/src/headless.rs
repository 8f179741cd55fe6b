use anyhow::{anyhow, bail, Context};
use std::io::Write;

use crate::catalog::{Catalog, CatalogEntry};
use crate::clipboard::ClipboardSink;
use crate::selection::{export_text, CopyOutcome, Selection};

fn find_entry<'a>(catalog: &'a Catalog, name: &str) -> anyhow::Result<(usize, &'a CatalogEntry)> {
    catalog
        .find(name)
        .ok_or_else(|| anyhow!("no configuration named '{name}' (see --list)"))
}

pub fn list(catalog: &Catalog, out: &mut impl Write) -> anyhow::Result<()> {
    for entry in catalog.list() {
        writeln!(
            out,
            "{:<18}{:<12}{:<28}{}",
            entry.name,
            entry.last_updated,
            entry.tags.join(", "),
            entry.description
        )?;
    }
    Ok(())
}

pub fn print(catalog: &Catalog, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let (_, entry) = find_entry(catalog, name)?;
    let text = export_text(entry).with_context(|| format!("cannot export '{}'", entry.name))?;
    writeln!(out, "{text}")?;
    Ok(())
}

pub fn copy(
    catalog: &Catalog,
    name: &str,
    clipboard: &mut impl ClipboardSink,
) -> anyhow::Result<(String, usize)> {
    let (index, _) = find_entry(catalog, name)?;
    let mut selection = Selection::default();
    selection.select(catalog, index);
    match selection.copy(catalog, clipboard)? {
        CopyOutcome::Copied { name, bytes } => Ok((name, bytes)),
        CopyOutcome::NothingSelected => bail!("'{name}' could not be selected"),
    }
}
