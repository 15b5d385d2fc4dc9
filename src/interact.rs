//! Injected interaction seams.
//!
//! The contact book never talks to a console directly. Everything a human
//! supplies at runtime (field values at creation, the yes/no on a delete,
//! the pick for a merge conflict) arrives through the small traits in this
//! module, so an automated decision source can stand in for the console in
//! tests and embedding programs.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::contact::{Address, Contact, ContactId, NewContact};
use crate::merge::{MergeChoice, MergeResolver};
use crate::phone;

/// How many times a conflict prompt is repeated before the merge is
/// abandoned.
const MAX_RESOLVE_ATTEMPTS: usize = 3;

/// A line-based prompt/response capability.
pub trait Prompter {
    /// Shows `message` and returns one line of response, without the
    /// trailing newline.
    fn prompt(&mut self, message: &str) -> io::Result<String>;
}

/// Prompter backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    /// Creates a console prompter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prompter that replays a fixed script of answers.
///
/// Once the script runs dry every further prompt answers with an empty
/// line. The prompts that were shown are recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    shown: Vec<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that will answer with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }

    /// The prompts shown so far, in order.
    #[must_use]
    pub fn shown(&self) -> &[String] {
        &self.shown
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.shown.push(message.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Supplies the yes/no decision a deletion requires.
pub trait DeleteConfirmer {
    /// Returns true if the caller confirms removing `contact`.
    fn confirm_delete(&mut self, id: &ContactId, contact: &Contact) -> bool;
}

impl<F> DeleteConfirmer for F
where
    F: FnMut(&ContactId, &Contact) -> bool,
{
    fn confirm_delete(&mut self, id: &ContactId, contact: &Contact) -> bool {
        self(id, contact)
    }
}

/// Deletion confirmer that asks a [`Prompter`] for an explicit `yes`.
///
/// Anything other than a literal `yes` (case-insensitive, trimmed)
/// declines. A prompt failure declines as well.
#[derive(Debug)]
pub struct PromptConfirmer<P> {
    prompter: P,
}

impl<P: Prompter> PromptConfirmer<P> {
    /// Wraps a prompter.
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }
}

impl<P: Prompter> DeleteConfirmer for PromptConfirmer<P> {
    fn confirm_delete(&mut self, id: &ContactId, contact: &Contact) -> bool {
        let message = format!(
            "Delete {id} ({name})? Type 'yes' to confirm: ",
            name = contact.full_name()
        );
        match self.prompter.prompt(&message) {
            Ok(answer) => answer.trim().eq_ignore_ascii_case("yes"),
            Err(err) => {
                tracing::warn!(%id, %err, "delete confirmation prompt failed; declining");
                false
            }
        }
    }
}

/// Merge resolver that asks a [`Prompter`] to choose `1` or `2`.
///
/// An unrecognized answer re-prompts, three attempts in total; after that
/// the resolver gives up and the merge fails without touching the store.
#[derive(Debug)]
pub struct PromptResolver<P> {
    prompter: P,
}

impl<P: Prompter> PromptResolver<P> {
    /// Wraps a prompter.
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }
}

impl<P: Prompter> MergeResolver for PromptResolver<P> {
    fn choose(&mut self, field: &str, left: &str, right: &str) -> Option<MergeChoice> {
        let mut message = format!("Conflict in {field}:\n  1) {left}\n  2) {right}\nChoose 1 or 2: ");
        for _ in 0..MAX_RESOLVE_ATTEMPTS {
            let answer = match self.prompter.prompt(&message) {
                Ok(answer) => answer,
                Err(err) => {
                    tracing::warn!(field, %err, "conflict prompt failed; leaving unresolved");
                    return None;
                }
            };
            match answer.trim() {
                "1" => return Some(MergeChoice::Left),
                "2" => return Some(MergeChoice::Right),
                _ => message = "Choose 1 or 2: ".to_string(),
            }
        }
        tracing::warn!(field, "conflict prompt exhausted; leaving unresolved");
        None
    }
}

/// Asks a required field, re-prompting once when the answer is blank.
fn required_field(
    prompter: &mut impl Prompter,
    first: &str,
    retry: &str,
) -> io::Result<String> {
    let answer = prompter.prompt(first)?;
    if answer.trim().is_empty() {
        return prompter.prompt(retry).map(|s| s.trim().to_string());
    }
    Ok(answer.trim().to_string())
}

/// Collects candidate contact data over a [`Prompter`].
///
/// Required fields are re-prompted once when left blank; a phone that does
/// not normalize to ten digits earns one more chance, and either way the
/// value is kept exactly as typed. The category is lower-cased, matching
/// how stored categories are conventionally written. Blank answers leave
/// optional fields absent; validation happens at insertion, not here.
///
/// # Errors
///
/// Propagates prompt I/O failures.
pub fn collect_new_contact(prompter: &mut impl Prompter) -> io::Result<NewContact> {
    let first_name = required_field(
        prompter,
        "First name (required): ",
        "First name can't be blank. First name: ",
    )?;
    let last_name = required_field(
        prompter,
        "Last name (required): ",
        "Last name can't be blank. Last name: ",
    )?;
    let mut phone_number = required_field(
        prompter,
        "Phone (required): ",
        "Phone number can't be blank. Phone: ",
    )?;
    if phone::normalize(&phone_number).len() != 10 {
        let again =
            prompter.prompt("Phone number doesn't look like ten digits. Phone: ")?;
        if !again.trim().is_empty() {
            phone_number = again.trim().to_string();
        }
    }

    let email = prompter.prompt("Email (optional): ")?.trim().to_string();
    let notes = prompter.prompt("Notes (optional): ")?.trim().to_string();
    let category = prompter
        .prompt("Category [personal/work/family] (default personal): ")?
        .trim()
        .to_lowercase();

    let address = Address {
        street: prompter.prompt("Street: ")?.trim().to_string(),
        city: prompter.prompt("City: ")?.trim().to_string(),
        state: prompter.prompt("State: ")?.trim().to_string(),
        zip_code: prompter.prompt("Zip: ")?.trim().to_string(),
    };

    Ok(NewContact {
        first_name,
        last_name,
        phone: phone_number,
        email,
        address,
        category,
        notes,
    })
}
