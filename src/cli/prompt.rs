use std::collections::VecDeque;
use std::io::{self, Write};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{trace, warn};
use crate::cli::render::{self, Palette};
use crate::core::database::Database;
use crate::core::types::{EntityKind, NULL_OR_EMPTY};
use crate::schema::schema::schema_for;
use crate::search::query::SearchQuery;

/// Where the prompt reads operator input from.
///
/// `Ok(None)` ends the session (Ctrl-C, Ctrl-D or end of script).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.add_history_entry(line.as_str()) {
                        trace!(error = %err, "history entry not recorded");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::other(err.to_string())),
        }
    }
}

/// Canned input, one entry per prompt.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedLines {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Welcome,
    SelectEntity { show_fields: bool },
    SelectField { kind: EntityKind, show_fields: bool },
    EnterValue { kind: EntityKind, field: String },
    Restart { kind: EntityKind },
}

const QUIT: &str = "quit";

/// Interactive search session over a loaded database.
pub struct Prompt<'db, S, W> {
    db: &'db Database,
    input: S,
    out: W,
    palette: Palette,
}

impl<'db, S: LineSource, W: Write> Prompt<'db, S, W> {
    pub fn new(db: &'db Database, input: S, out: W, palette: Palette) -> Self {
        Prompt { db, input, out, palette }
    }

    /// Run until the operator quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let mut step = Step::Welcome;
        loop {
            let next = match step {
                Step::Welcome => self.welcome()?,
                Step::SelectEntity { show_fields } => self.select_entity(show_fields)?,
                Step::SelectField { kind, show_fields } => self.select_field(kind, show_fields)?,
                Step::EnterValue { kind, field } => self.enter_value(kind, field)?,
                Step::Restart { kind } => self.restart(kind)?,
            };
            match next {
                Some(next) => step = next,
                None => {
                    writeln!(self.out, "Goodbye")?;
                    return Ok(());
                }
            }
        }
    }

    /// Read one answer as typed.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.out, "\n{text}")?;
        self.out.flush()?;
        self.input.read_line("> ")
    }

    /// Read a menu or field choice, where `quit` ends the session.
    fn choose(&mut self, text: &str) -> io::Result<Option<String>> {
        let line = self.ask(text)?;
        Ok(line.filter(|line| !line.trim().eq_ignore_ascii_case(QUIT)))
    }

    fn invalid(&mut self, choice: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", self.palette.red(&format!("{choice} is an invalid choice")))
    }

    fn welcome(&mut self) -> io::Result<Option<Step>> {
        writeln!(self.out, "\nWelcome to Desk Search!")?;
        writeln!(self.out, "Type '{QUIT}' or press Ctrl-C at any time to exit")?;
        let Some(choice) = self.choose(
            "       Select search option:\n\
             \x20      * Press 1 to search\n\
             \x20      * Press any other key to view searchable fields",
        )?
        else {
            return Ok(None);
        };
        Ok(Some(Step::SelectEntity { show_fields: choice.trim() != "1" }))
    }

    fn select_entity(&mut self, show_fields: bool) -> io::Result<Option<Step>> {
        if show_fields {
            for kind in EntityKind::ALL {
                render::render_fields(&mut self.out, kind, self.palette)?;
            }
        }

        let menu: Vec<String> = EntityKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| format!("{}) {}", i + 1, kind.plural()))
            .collect();
        let Some(choice) = self.choose(&format!("Select entity to search\n{}", menu.join("\n")))? else {
            return Ok(None);
        };

        match choice.trim().parse().ok().and_then(EntityKind::from_menu) {
            Some(kind) => Ok(Some(Step::SelectField { kind, show_fields: false })),
            None => {
                self.invalid(&choice)?;
                Ok(Some(Step::SelectEntity { show_fields: false }))
            }
        }
    }

    fn select_field(&mut self, kind: EntityKind, show_fields: bool) -> io::Result<Option<Step>> {
        if show_fields {
            render::render_fields(&mut self.out, kind, self.palette)?;
        }

        let Some(field) = self.choose(&format!(
            "Enter search term for {kind} or press enter to view searchable fields"
        ))?
        else {
            return Ok(None);
        };

        let field = field.trim();
        if field.is_empty() {
            return Ok(Some(Step::SelectField { kind, show_fields: true }));
        }
        if !schema_for(kind).contains(field) {
            self.invalid(field)?;
            return Ok(Some(Step::SelectField { kind, show_fields: true }));
        }
        Ok(Some(Step::EnterValue { kind, field: field.to_string() }))
    }

    fn enter_value(&mut self, kind: EntityKind, field: String) -> io::Result<Option<Step>> {
        let Some(value) = self.ask(&format!(
            "Enter search value for {kind} {field} or press enter to find empty values"
        ))?
        else {
            return Ok(None);
        };

        let value = if value.is_empty() { NULL_OR_EMPTY.to_string() } else { value };
        let query = SearchQuery::new(kind, field, value);
        match self.db.search(&query) {
            Ok(results) => render::render_results(&mut self.out, &results, self.palette)?,
            Err(err) => {
                warn!(query = %query, error = %err, "search failed");
                writeln!(self.out, "\n{}", self.palette.red(&err.to_string()))?;
            }
        }
        Ok(Some(Step::Restart { kind }))
    }

    fn restart(&mut self, kind: EntityKind) -> io::Result<Option<Step>> {
        let Some(choice) = self.choose(&format!(
            "Enter 1 to search {} again, or any other key to restart from the start",
            kind.plural()
        ))?
        else {
            return Ok(None);
        };

        if choice.trim() == "1" {
            Ok(Some(Step::SelectField { kind, show_fields: false }))
        } else {
            Ok(Some(Step::Welcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RecordId;
    use crate::model::{Organization, Ticket, User};

    fn database() -> Database {
        let mut enthaze = Organization::new("101");
        enthaze.name = Some("Enthaze".to_string());

        let mut francisca = User::new("1");
        francisca.name = Some("Francisca Rasmussen".to_string());
        francisca.organization_id = Some(RecordId::from("101"));

        let mut ticket = Ticket::new("436bf9b0-1147-4c0a-8439-6f79833bff5b");
        ticket.subject = Some("A Catastrophe in Korea (North)".to_string());
        ticket.submitter_id = Some(RecordId::from("1"));

        Database::from_collections(
            vec![enthaze].into_iter().collect(),
            vec![francisca].into_iter().collect(),
            vec![ticket].into_iter().collect(),
        )
    }

    fn session(lines: &[&str]) -> String {
        let db = database();
        let mut out = Vec::new();
        Prompt::new(&db, ScriptedLines::new(lines.iter().copied()), &mut out, Palette::plain())
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_search_users_by_name() {
        let out = session(&["1", "2", "name", "Francisca Rasmussen", "quit"]);
        assert!(out.contains("Searching Users by name Francisca Rasmussen returned 1 results"));
        assert!(out.contains("Related Organization"));
        assert!(out.contains("A Catastrophe in Korea (North)"));
        assert!(out.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_quit_is_a_searchable_value() {
        let out = session(&["1", "2", "name", "Quit", "quit"]);
        assert!(out.contains("Searching Users by name Quit returned 0 results"));
        assert!(out.contains("Enter 1 to search Users again"));
        assert!(out.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_quit_at_field_prompt_exits() {
        let out = session(&["1", "2", "quit", "name"]);
        assert!(!out.contains("Enter search value"));
        assert!(out.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_invalid_entity_reprompts() {
        let out = session(&["1", "7", "1", "name", ""]);
        assert!(out.contains("7 is an invalid choice"));
        assert!(out.contains("Searching Organizations with an empty name field returned 0 results"));
    }

    #[test]
    fn test_unknown_field_lists_fields() {
        let out = session(&["1", "3", "alias"]);
        assert!(out.contains("alias is an invalid choice"));
        assert!(out.contains("Search Tickets with"));
    }

    #[test]
    fn test_enter_lists_fields() {
        let out = session(&["1", "1", ""]);
        assert!(out.contains("Search Organizations with"));
        assert!(!out.contains("invalid choice"));
    }

    #[test]
    fn test_search_same_entity_again() {
        let out = session(&["1", "1", "id", "101", "1", "name", "Enthaze"]);
        assert_eq!(out.matches("Searching Organizations").count(), 2);
        assert_eq!(out.matches("Welcome to Desk Search!").count(), 1);
    }

    #[test]
    fn test_restart_from_the_start() {
        let out = session(&["1", "1", "id", "101", "x"]);
        assert_eq!(out.matches("Welcome to Desk Search!").count(), 2);
    }

    #[test]
    fn test_welcome_can_show_all_fields() {
        let out = session(&["2"]);
        for kind in EntityKind::ALL {
            assert!(out.contains(&format!("Search {} with", kind.plural())));
        }
    }

    #[test]
    fn test_end_of_input_exits() {
        assert!(session(&[]).ends_with("Goodbye\n"));
    }
}
