use anyhow::{Context, Result, bail};
use toolshop_types::{EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Use(EntityKind),
    List,
    Search(String),
    New,
    Edit(EntityId),
    Set { field: String, value: String },
    Form,
    Save,
    Cancel,
    Delete(EntityId),
    Dashboard,
    Help,
    Quit,
}

/// One shell line: an action, optionally aimed at a page other than the active one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub target: Option<EntityKind>,
    pub action: Action,
}

impl ShellCommand {
    /// Parse a non-empty line. `products list` targets the products page
    /// without switching to it; a bare `products` switches.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some((first, rest)) = next_word(line) else {
            bail!("empty command");
        };

        let (target, verb, rest) = match first.parse::<EntityKind>() {
            Ok(kind) => match next_word(rest) {
                Some((verb, rest)) => (Some(kind), verb, rest),
                None => {
                    return Ok(Self {
                        target: None,
                        action: Action::Use(kind),
                    });
                }
            },
            Err(_) => (None, first, rest),
        };

        let args: Vec<&str> = rest.split_whitespace().collect();
        let action = match verb.to_lowercase().as_str() {
            "use" => {
                let page = single_arg(verb, &args)?;
                Action::Use(page.parse::<EntityKind>().map_err(anyhow::Error::msg)?)
            }
            "list" | "ls" => Action::List,
            // Free text is kept verbatim, inner spacing included
            "search" | "find" => Action::Search(rest.to_string()),
            "new" | "add" => Action::New,
            "edit" => Action::Edit(id_arg(verb, &args)?),
            "set" => match next_word(rest) {
                Some((field, value)) => Action::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                },
                None => bail!("usage: set <field> <value>"),
            },
            "form" | "show" => Action::Form,
            "save" | "submit" => Action::Save,
            "cancel" => Action::Cancel,
            "delete" | "rm" => Action::Delete(id_arg(verb, &args)?),
            "dashboard" => Action::Dashboard,
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => bail!("unknown command '{}' (try 'help')", other),
        };

        Ok(Self { target, action })
    }
}

/// The next word and everything after the single separator that ends it
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((at, sep)) => Some((&input[..at], &input[at + sep.len_utf8()..])),
        None => Some((input, "")),
    }
}

fn single_arg<'a>(verb: &str, rest: &[&'a str]) -> Result<&'a str> {
    match rest {
        [arg] => Ok(*arg),
        _ => bail!("usage: {} <products|customers|orders>", verb),
    }
}

fn id_arg(verb: &str, rest: &[&str]) -> Result<EntityId> {
    match rest {
        [id] => id
            .parse::<EntityId>()
            .with_context(|| format!("'{}' is not a record id", id)),
        _ => bail!("usage: {} <id>", verb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(line: &str) -> Action {
        ShellCommand::parse(line).unwrap().action
    }

    #[test]
    fn test_plain_verbs() {
        assert_eq!(action("list"), Action::List);
        assert_eq!(action("  new "), Action::New);
        assert_eq!(action("edit 3"), Action::Edit(EntityId::new(3)));
        assert_eq!(action("delete 2"), Action::Delete(EntityId::new(2)));
        assert_eq!(action("EXIT"), Action::Quit);
    }

    #[test]
    fn test_search_keeps_spaces_and_allows_empty() {
        assert_eq!(
            action("search chave de fenda"),
            Action::Search("chave de fenda".to_string())
        );
        assert_eq!(action("search"), Action::Search(String::new()));
        assert_eq!(action("search a  b\r\n"), Action::Search("a  b".to_string()));
        assert_eq!(
            action("orders search  Freud"),
            Action::Search(" Freud".to_string())
        );
    }

    #[test]
    fn test_set_joins_value_words() {
        assert_eq!(
            action("set address Rua das Teorias, 42"),
            Action::Set {
                field: "address".to_string(),
                value: "Rua das Teorias, 42".to_string(),
            }
        );
        assert_eq!(
            action("set name Trena  5m\n"),
            Action::Set {
                field: "name".to_string(),
                value: "Trena  5m".to_string(),
            }
        );
        assert!(ShellCommand::parse("set").is_err());
    }

    #[test]
    fn test_entity_prefix_targets_page() {
        let command = ShellCommand::parse("orders list").unwrap();
        assert_eq!(command.target, Some(EntityKind::Order));
        assert_eq!(command.action, Action::List);

        let command = ShellCommand::parse("customer").unwrap();
        assert_eq!(command.target, None);
        assert_eq!(command.action, Action::Use(EntityKind::Customer));
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(ShellCommand::parse("frobnicate").is_err());
        assert!(ShellCommand::parse("edit abc").is_err());
        assert!(ShellCommand::parse("delete").is_err());
        assert!(ShellCommand::parse("use warehouses").is_err());
    }
}
