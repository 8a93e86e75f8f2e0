//! Line-oriented back office: one admin page active at a time, each page
//! driving its own list controller.

mod command;

pub use command::{Action, ShellCommand};

use crate::presentation::{Renderer, TableRow};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use toolshop_engine::{Confirm, DeleteOutcome, EntityListController, SubmitOutcome};
use toolshop_runtime::Backoffice;
use toolshop_types::{Entity, EntityKind};

const NO_FORM: &str = "No form is open. Use 'new' or 'edit <id>' first.";

const HELP: &str = "\
Commands (prefix with products, customers or orders to target another page):
  use <page>            switch the active page
  list                  show records matching the current search
  search [term]         filter records; no term clears the filter
  new                   open an empty form
  edit <id>             open a record in the form
  set <field> <value>   stage a form field
  form                  show the staged form
  save                  create or update from the form
  cancel                discard the form
  delete <id>           delete a record after confirmation
  dashboard             sales, customer and stock metrics
  help                  this text
  quit                  leave the shell";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<C: Confirm> {
    backoffice: Backoffice<C>,
    active: EntityKind,
    renderer: Renderer,
}

impl<C: Confirm> Shell<C> {
    pub fn new(backoffice: Backoffice<C>, renderer: Renderer) -> Self {
        Self {
            backoffice,
            active: EntityKind::Product,
            renderer,
        }
    }

    pub fn active(&self) -> EntityKind {
        self.active
    }

    pub fn backoffice(&self) -> &Backoffice<C> {
        &self.backoffice
    }

    pub fn prompt(&self) -> String {
        format!("toolshop:{}> ", self.active.plural())
    }

    /// Run one input line. Bad input is reported on `out` and never ends the session.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellCommand::parse(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {:#}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let kind = command.target.unwrap_or(self.active);
        match command.action {
            Action::Quit => return Ok(Flow::Quit),
            Action::Help => writeln!(out, "{}", HELP)?,
            Action::Use(kind) => {
                self.active = kind;
                writeln!(out, "Now managing {}", kind.plural())?;
            }
            Action::Dashboard => {
                let summary = self.backoffice.dashboard();
                self.renderer.dashboard(out, &summary)?;
            }
            action => {
                let renderer = self.renderer;
                match kind {
                    EntityKind::Product => {
                        run_page(self.backoffice.products_mut(), renderer, action, out)?
                    }
                    EntityKind::Customer => {
                        run_page(self.backoffice.customers_mut(), renderer, action, out)?
                    }
                    EntityKind::Order => {
                        run_page(self.backoffice.orders_mut(), renderer, action, out)?
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }
}

fn run_page<T, C>(
    page: &mut EntityListController<T, C>,
    renderer: Renderer,
    action: Action,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Entity + TableRow + Serialize,
    T::Draft: Serialize,
    C: Confirm,
{
    let noun = T::KIND.singular();

    match action {
        Action::List => show_list(page, renderer, out)?,
        Action::Search(term) => {
            page.set_search_term(term);
            show_list(page, renderer, out)?;
        }
        Action::New => {
            page.begin_create();
            show_form(page, renderer, out)?;
        }
        Action::Edit(id) => {
            if page.begin_edit_id(id) {
                show_form(page, renderer, out)?;
            } else {
                writeln!(out, "No {} with id {}", noun, id)?;
            }
        }
        Action::Set { field, value } => {
            if !page.form_visible() {
                writeln!(out, "{}", NO_FORM)?;
            } else if let Err(e) = page.stage_field(&field, &value) {
                writeln!(out, "error: {}", e)?;
            }
        }
        Action::Form => {
            if page.form_visible() {
                show_form(page, renderer, out)?;
            } else {
                writeln!(out, "{}", NO_FORM)?;
            }
        }
        Action::Save => {
            if !page.form_visible() {
                writeln!(out, "{}", NO_FORM)?;
                return Ok(());
            }
            match page.submit_staged() {
                Ok(SubmitOutcome::Created(id)) => writeln!(out, "Created {} #{}", noun, id)?,
                Ok(SubmitOutcome::Updated(id)) => writeln!(out, "Updated {} #{}", noun, id)?,
                Ok(SubmitOutcome::UpdateMissed(id)) => {
                    writeln!(out, "Nothing changed: {} #{} no longer exists", noun, id)?
                }
                Err(e) => writeln!(out, "error: {} (use 'cancel' to discard the form)", e)?,
            }
        }
        Action::Cancel => {
            page.cancel();
            writeln!(out, "Form discarded")?;
        }
        Action::Delete(id) => match page.delete(id) {
            DeleteOutcome::Deleted => writeln!(out, "Deleted {} #{}", noun, id)?,
            DeleteOutcome::Declined => writeln!(out, "Delete cancelled")?,
            DeleteOutcome::NotFound => writeln!(out, "No {} with id {}", noun, id)?,
        },
        Action::Use(_) | Action::Dashboard | Action::Help | Action::Quit => {}
    }

    Ok(())
}

fn show_list<T, C>(
    page: &EntityListController<T, C>,
    renderer: Renderer,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Entity + TableRow + Serialize,
    C: Confirm,
{
    let rows: Vec<&T> = page.visible().collect();
    let empty = if page.search_term().is_empty() {
        format!("No {} yet.", T::KIND.plural())
    } else {
        format!("No {} match '{}'.", T::KIND.plural(), page.search_term())
    };
    renderer.records(out, &rows, &empty)
}

fn show_form<T, C>(
    page: &EntityListController<T, C>,
    renderer: Renderer,
    out: &mut dyn Write,
) -> Result<()>
where
    T: Entity,
    T::Draft: Serialize,
    C: Confirm,
{
    let Some(staged) = page.staged() else {
        return Ok(());
    };
    let title = match page.editing() {
        Some(record) => format!("Edit {} #{}", T::KIND.singular(), record.id()),
        None => format!("New {}", T::KIND.singular()),
    };
    renderer.form(out, &title, staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::OutputFormat;
    use toolshop_engine::{AlwaysConfirm, ScriptedConfirm, UpdateMissPolicy};
    use toolshop_runtime::Config;
    use toolshop_types::EntityId;

    fn shell<C: Confirm + Clone>(config: &Config, confirm: C) -> Shell<C> {
        Shell::new(
            Backoffice::from_config(config, confirm),
            Renderer::new(OutputFormat::Plain, false),
        )
    }

    fn run<C: Confirm>(shell: &mut Shell<C>, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            shell.execute(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_create_product_through_form() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(
            &mut shell,
            &["new", "set name Trena 5m", "set price 49,90", "set stock 12", "save"],
        );

        assert!(out.contains("New product"), "{out}");
        assert!(out.ends_with("Created product #5\n"), "{out}");
        let created = shell.backoffice().products().find(EntityId::new(5)).unwrap();
        assert_eq!(created.name, "Trena 5m");
        assert_eq!(created.stock, 12);
        assert!(!shell.backoffice().products().form_visible());
    }

    #[test]
    fn test_edit_customer_keeps_identity() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(
            &mut shell,
            &["use customers", "edit 2", "set city Viena", "save"],
        );

        assert!(out.contains("Edit customer #2"), "{out}");
        assert!(out.contains("Updated customer #2"), "{out}");
        let customers = shell.backoffice().customers();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers.find(EntityId::new(2)).unwrap().city, "Viena");
    }

    #[test]
    fn test_declined_delete_keeps_record() {
        let mut shell = shell(&Config::default(), ScriptedConfirm::new([false, true]));

        let out = run(&mut shell, &["orders delete 1", "orders delete 1"]);

        assert_eq!(out, "Delete cancelled\nDeleted order #1\n");
        assert_eq!(shell.backoffice().orders().len(), 1);
        assert_eq!(shell.active(), EntityKind::Product);
    }

    #[test]
    fn test_delete_missing_id_reports_it() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(&mut shell, &["delete 99"]);

        assert_eq!(out, "No product with id 99\n");
        assert_eq!(shell.backoffice().products().len(), 4);
    }

    #[test]
    fn test_search_filters_listing() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(&mut shell, &["search SERRA"]);
        assert!(out.contains("Serra Circular Industrial"), "{out}");
        assert!(!out.contains("Furadeira"), "{out}");

        let out = run(&mut shell, &["search nothing-like-this"]);
        assert_eq!(out, "No products match 'nothing-like-this'.\n");

        let out = run(&mut shell, &["search", "list"]);
        assert_eq!(out.matches("Furadeira").count(), 2);
    }

    #[test]
    fn test_form_commands_need_an_open_form() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(&mut shell, &["set name X", "save", "form"]);

        assert_eq!(out, format!("{NO_FORM}\n{NO_FORM}\n{NO_FORM}\n"));
        assert_eq!(shell.backoffice().products().len(), 4);
    }

    #[test]
    fn test_invalid_field_value_keeps_form_open() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(&mut shell, &["new", "set price cheap", "set sku A1"]);

        assert!(out.contains("Invalid value 'cheap' for price"), "{out}");
        assert!(out.contains("Unknown product field: 'sku'"), "{out}");
        assert!(shell.backoffice().products().form_visible());
    }

    #[test]
    fn test_strict_update_miss_is_reported() {
        let mut config = Config::default();
        config.controller.update_miss = UpdateMissPolicy::Error;
        let mut shell = shell(&config, AlwaysConfirm);

        let out = run(&mut shell, &["edit 1", "delete 1", "save"]);

        assert!(out.contains("error: No product with id 1"), "{out}");
        assert!(shell.backoffice().products().form_visible());

        let out = run(&mut shell, &["cancel"]);
        assert_eq!(out, "Form discarded\n");
        assert!(!shell.backoffice().products().form_visible());
    }

    #[test]
    fn test_lenient_update_miss_closes_form() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(&mut shell, &["edit 1", "delete 1", "save"]);

        assert!(out.ends_with("Nothing changed: product #1 no longer exists\n"), "{out}");
        assert_eq!(shell.backoffice().products().len(), 3);
    }

    #[test]
    fn test_dashboard_survives_huge_order_total() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);

        let out = run(
            &mut shell,
            &[
                "orders edit 1",
                "orders set total 79228162514264337593543950335",
                "orders save",
                "dashboard",
            ],
        );

        assert!(out.contains("Updated order #1"), "{out}");
        assert!(out.contains("Total sales"), "{out}");
        assert!(out.contains("R$ 79.228.162.514.264.337.593.543.950.335,00"), "{out}");
    }

    #[test]
    fn test_unknown_command_and_quit() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);
        let mut out = Vec::new();

        assert_eq!(shell.execute("fly", &mut out).unwrap(), Flow::Continue);
        assert_eq!(shell.execute("   ", &mut out).unwrap(), Flow::Continue);
        assert_eq!(shell.execute("quit", &mut out).unwrap(), Flow::Quit);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: unknown command 'fly' (try 'help')\n"
        );
    }

    #[test]
    fn test_prompt_follows_active_page() {
        let mut shell = shell(&Config::default(), AlwaysConfirm);
        assert_eq!(shell.prompt(), "toolshop:products> ");

        run(&mut shell, &["orders"]);
        assert_eq!(shell.prompt(), "toolshop:orders> ");
    }
}
