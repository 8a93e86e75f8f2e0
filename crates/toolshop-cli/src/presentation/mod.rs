//! Console and JSON rendering of records, forms and dashboard tables.

pub mod rows;
pub mod table;

pub use rows::{CatalogRow, TrackRow};
pub use table::{Cell, TableRow, Tone, paint, write_table};

use crate::args::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::Write;
use toolshop_engine::DashboardSummary;
use toolshop_engine::format::format_currency;
use toolshop_types::Draft;

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    color: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Color only plain output going to a terminal
    pub fn for_stdout(format: OutputFormat) -> Self {
        let color = format == OutputFormat::Plain && std::io::stdout().is_terminal();
        Self::new(format, color)
    }

    pub fn records<R>(&self, out: &mut dyn Write, rows: &[R], empty_message: &str) -> Result<()>
    where
        R: TableRow + Serialize,
    {
        match self.format {
            OutputFormat::Json => write_json(out, rows),
            OutputFormat::Plain if rows.is_empty() => {
                writeln!(out, "{}", empty_message)?;
                Ok(())
            }
            OutputFormat::Plain => {
                write_table(out, rows, self.color)?;
                Ok(())
            }
        }
    }

    pub fn dashboard(&self, out: &mut dyn Write, summary: &DashboardSummary) -> Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(out, summary);
        }

        writeln!(out, "{:<16} {}", "Total sales", format_currency(summary.total_sales))?;
        writeln!(out, "{:<16} {}", "Customers", summary.customer_count)?;
        writeln!(out, "{:<16} {}", "Pending orders", summary.pending_orders)?;
        let low = summary.low_stock.len().to_string();
        let low_tone = if summary.low_stock.is_empty() {
            Tone::Plain
        } else {
            Tone::Danger
        };
        writeln!(out, "{:<16} {}", "Low stock", paint(&low, low_tone, self.color))?;

        if !summary.low_stock.is_empty() {
            writeln!(out)?;
            writeln!(out, "Low stock products")?;
            write_table(out, &summary.low_stock, self.color)?;
        }
        if !summary.sales_by_month.is_empty() {
            writeln!(out)?;
            writeln!(out, "Sales by month")?;
            write_table(out, &summary.sales_by_month, self.color)?;
        }
        if !summary.stock_by_category.is_empty() {
            writeln!(out)?;
            writeln!(out, "Stock by category")?;
            write_table(out, &summary.stock_by_category, self.color)?;
        }
        Ok(())
    }

    /// Staged form values, one `field: value` per line
    pub fn form<D: Draft + Serialize>(
        &self,
        out: &mut dyn Write,
        title: &str,
        staged: &D,
    ) -> Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(out, staged);
        }

        writeln!(out, "{}", title)?;
        let fields = staged.fields();
        let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, value) in fields {
            writeln!(out, "  {:<width$}  {}", name, value, width = width)?;
        }
        Ok(())
    }
}

fn write_json<S: Serialize + ?Sized>(out: &mut dyn Write, value: &S) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
