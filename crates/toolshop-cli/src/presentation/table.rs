use owo_colors::OwoColorize;
use std::io::{self, Write};
use toolshop_types::OrderStatus;

/// Highlight applied to a cell when color is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Warn,
    Info,
    Accent,
    Good,
    Danger,
}

impl Tone {
    pub fn for_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Tone::Warn,
            OrderStatus::Processing => Tone::Info,
            OrderStatus::Shipped => Tone::Accent,
            OrderStatus::Delivered => Tone::Good,
            OrderStatus::Cancelled => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

impl<T: TableRow> TableRow for &T {
    fn headers() -> &'static [&'static str] {
        T::headers()
    }

    fn cells(&self) -> Vec<Cell> {
        (*self).cells()
    }
}

pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Warn => text.yellow().to_string(),
        Tone::Info => text.blue().to_string(),
        Tone::Accent => text.magenta().to_string(),
        Tone::Good => text.green().to_string(),
        Tone::Danger => text.red().to_string(),
    }
}

/// Left-aligned columns sized to the widest cell, header underlined with dashes
pub fn write_table<R: TableRow>(out: &mut dyn Write, rows: &[R], color: bool) -> io::Result<()> {
    let headers = R::headers();
    let body: Vec<Vec<Cell>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{:<width$}", header, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", header_line.trim_end())?;
    let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(out, "{}", "-".repeat(rule))?;

    for row in &body {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let padded = format!("{:<width$}", cell.text, width = *width);
                paint(&padded, cell.tone, color)
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}
