//! Text rendering for the console menu.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};

use crate::domain::{CatalogItem, Establishment, SizeLabel};

/// Words kept in lower case by [`title_case`] unless they open the text.
const CONNECTIVES: [&str; 6] = ["do", "da", "dos", "das", "de", "e"];

/// Capitalizes each word except the Portuguese connectives ("bar do zé" -> "Bar do Zé").
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && CONNECTIVES.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn subtitle<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let line = "*".repeat(text.chars().count());
    writeln!(out, "{line}")?;
    writeln!(out, "{text}")?;
    writeln!(out, "{line}\n")
}

/// Name | Category | Rating | Status table of every establishment.
pub fn establishments_table(establishments: &[Establishment]) -> Table {
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Rating").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
    ]);
    for establishment in establishments {
        let rating = establishment
            .average_rating()
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));
        let status = if establishment.is_active() { "🟢" } else { "🔴" };
        _ = table.add_row(vec![
            Cell::new(title_case(establishment.name())),
            Cell::new(title_case(establishment.category())),
            Cell::new(rating),
            Cell::new(status),
        ]);
    }
    table
}

/// Numbered catalog listing with each variant's details.
pub fn write_catalog<W: Write>(out: &mut W, establishment: &Establishment) -> io::Result<()> {
    let rule = "=".repeat(40);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Catalog of {}", establishment.name())?;
    writeln!(out, "{rule}\n")?;

    if establishment.catalog().is_empty() {
        return writeln!(out, "The catalog is empty.");
    }

    for (i, item) in establishment.catalog().iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({}) - R$ {}",
            i + 1,
            item.name(),
            item.variant().label(),
            item.price()
        )?;
        write_details(out, item)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_details<W: Write>(out: &mut W, item: &CatalogItem) -> io::Result<()> {
    match item {
        CatalogItem::Dish(dish) => {
            if let Some(description) = dish.description() {
                writeln!(out, "   📝 Description: {description}")?;
            }
        }
        CatalogItem::Drink(drink) => match drink.size() {
            Some(SizeLabel::Volume(ml)) => writeln!(out, "   🥤 Size: {ml} ml")?,
            Some(SizeLabel::Label(label)) => writeln!(out, "   🥤 Size: {label}")?,
            None => {}
        },
        CatalogItem::Dessert(dessert) => {
            if let Some(kind) = dessert.kind() {
                writeln!(out, "   🍰 Kind: {kind}")?;
            }
            if let Some(description) = dessert.description() {
                writeln!(out, "   📝 Description: {description}")?;
            }
            if let Some(size) = dessert.size() {
                writeln!(out, "   📏 Size: {size}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_keeps_connectives_lower() {
        assert_eq!(title_case("BAR DO ZÉ"), "Bar do Zé");
        assert_eq!(title_case("casa  de  pães e doces"), "Casa de Pães e Doces");
        assert_eq!(title_case("de volta"), "De Volta");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn empty_catalog_message() {
        let establishment = Establishment::new("Praça", "Gourmet");
        let mut out = Vec::new();
        write_catalog(&mut out, &establishment).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Catalog of Praça"));
        assert!(text.contains("The catalog is empty."));
    }
}
