use std::io::{self, Write};
use crossterm::style::{style, Color, Stylize};
use crate::core::stats::DatabaseStats;
use crate::core::types::{EntityKind, FieldValue};
use crate::model::{Organization, Ticket, User};
use crate::schema::schema::{schema_for, Record};
use crate::search::results::{Hits, SearchResults};

/// Terminal colors, or plain text when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Palette { color }
    }

    pub fn plain() -> Self {
        Palette { color: false }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    pub fn blue(&self, text: &str) -> String {
        self.paint(text, Color::Blue)
    }
}

/// Header, then every match with its related records.
pub fn render_results(out: &mut impl Write, results: &SearchResults<'_>, palette: Palette) -> io::Result<()> {
    let header = format!(
        "Searching {} returned {} results in {:.2} ms",
        results.query,
        results.total_hits(),
        results.took.as_secs_f64() * 1000.0
    );
    let header = if results.is_empty() { palette.red(&header) } else { palette.cyan(&header) };
    writeln!(out, "\n{header}\n")?;

    match &results.hits {
        Hits::Organizations(hits) => {
            for (i, hit) in hits.iter().enumerate() {
                render_record(out, hit.organization, i + 1, palette)?;
                render_related_users(out, &hit.users, palette)?;
                render_related_tickets(out, &hit.tickets, palette)?;
            }
        }
        Hits::Users(hits) => {
            for (i, hit) in hits.iter().enumerate() {
                render_record(out, hit.user, i + 1, palette)?;
                render_related_organization(out, hit.organization, palette)?;
                render_related_tickets(out, &hit.tickets, palette)?;
            }
        }
        Hits::Tickets(hits) => {
            for (i, hit) in hits.iter().enumerate() {
                render_record(out, hit.ticket, i + 1, palette)?;
                render_related_organization(out, hit.organization, palette)?;
                render_related_users(out, &hit.users, palette)?;
            }
        }
    }
    Ok(())
}

/// One record as a Field/Value table in schema order.
pub fn render_record<R: Record>(out: &mut impl Write, record: &R, number: usize, palette: Palette) -> io::Result<()> {
    writeln!(out, "{}\n", palette.green(&format!("******************** {} {number} ********************", R::KIND)))?;
    let rows: Vec<Vec<String>> = R::schema()
        .fields
        .iter()
        .map(|definition| {
            let value = record.field(definition.name).unwrap_or(FieldValue::Null);
            vec![definition.label.to_string(), value.display().into_owned()]
        })
        .collect();
    write_table(out, &["Field", "Value"], &rows)
}

fn render_related_organization(
    out: &mut impl Write,
    organization: Option<&Organization>,
    palette: Palette,
) -> io::Result<()> {
    match organization {
        None => writeln!(out, "{}\n", palette.red("---------- No Related Organization ----------")),
        Some(organization) => {
            writeln!(out, "{}\n", palette.blue("---------- Related Organization ----------"))?;
            let row = vec![organization.id.to_string(), text(&organization.name)];
            write_table(out, &["ID", "Name"], &[row])
        }
    }
}

fn render_related_users(out: &mut impl Write, users: &[&User], palette: Palette) -> io::Result<()> {
    if users.is_empty() {
        return writeln!(out, "{}\n", palette.red("---------- No Related Users ----------"));
    }
    writeln!(out, "{}\n", palette.blue("---------- Related Users ----------"))?;
    let rows: Vec<_> = users
        .iter()
        .map(|user| vec![user.id.to_string(), text(&user.name), text(&user.email)])
        .collect();
    write_table(out, &["ID", "Name", "Email"], &rows)
}

fn render_related_tickets(out: &mut impl Write, tickets: &[&Ticket], palette: Palette) -> io::Result<()> {
    if tickets.is_empty() {
        return writeln!(out, "{}\n", palette.red("---------- No Related Tickets ----------"));
    }
    writeln!(out, "{}\n", palette.blue("---------- Related Tickets ----------"))?;
    let rows: Vec<_> = tickets
        .iter()
        .map(|ticket| vec![text(&ticket.subject), text(&ticket.priority), text(&ticket.status)])
        .collect();
    write_table(out, &["Subject", "Priority", "Status"], &rows)
}

/// Searchable field names of one record type.
pub fn render_fields(out: &mut impl Write, kind: EntityKind, palette: Palette) -> io::Result<()> {
    let divider = "--------------------------------------";
    writeln!(out, "{}", palette.green(&format!("{divider}\n  Search {} with\n{divider}", kind.plural())))?;
    for field in schema_for(kind).fields {
        writeln!(out, "{:<16}{}", field.name, field.field_type)?;
    }
    writeln!(out)
}

pub fn render_stats(out: &mut impl Write, stats: &DatabaseStats, palette: Palette) -> io::Result<()> {
    writeln!(
        out,
        "{}\n",
        palette.cyan(&format!(
            "Loaded {} records ({} index entries) at {}",
            stats.total_records(),
            stats.total_entries(),
            stats.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ))
    )?;
    let rows: Vec<_> = stats
        .indexes
        .iter()
        .map(|index| {
            vec![
                index.kind.plural().to_string(),
                index.records.to_string(),
                index.fields.to_string(),
                index.distinct_values.to_string(),
                index.entries.to_string(),
                format!("{} us", index.build_micros),
            ]
        })
        .collect();
    write_table(out, &["Type", "Records", "Fields", "Distinct Values", "Entries", "Build"], &rows)
}

fn text(value: &Option<String>) -> String {
    FieldValue::text(value).display().into_owned()
}

/// Single-line box table, left aligned.
fn write_table(out: &mut impl Write, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", rule(&widths, "┌", "┬", "┐"))?;
    writeln!(out, "{}", line(headers.iter().copied(), &widths))?;
    writeln!(out, "{}", rule(&widths, "├", "┼", "┤"))?;
    for row in rows {
        writeln!(out, "{}", line(row.iter().map(String::as_str), &widths))?;
    }
    writeln!(out, "{}\n", rule(&widths, "└", "┴", "┘"))
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(mid))
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!(" {cell}{} ", " ".repeat(w.saturating_sub(cell.chars().count()))))
        .collect();
    format!("│{}│", padded.join("│"))
}
