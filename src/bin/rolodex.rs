//! Interactive contact manager.
//!
//! A numbered menu loop over a [`ContactBook`], with a JSON snapshot file
//! for saving and loading between sessions.

use std::path::PathBuf;

use anyhow::Context;

use rolodex::{
    collect_new_contact, render, Address, ConsolePrompter, ContactBook, ContactId, ContactPatch,
    PromptConfirmer, PromptResolver, Prompter,
};

/// Runtime configuration.
struct Config {
    /// Default snapshot path offered by the save/load menu entries.
    file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("contacts.json"),
        }
    }
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    config.file = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("error: --file requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("rolodex - interactive contact manager");
                println!();
                println!("Usage: rolodex [options]");
                println!();
                println!("Options:");
                println!("  -f, --file <path>   Default snapshot file (default: contacts.json)");
                println!("  -h, --help          Show this help");
                std::process::exit(0);
            }
            other => {
                eprintln!("error: unknown argument: {other}");
                std::process::exit(1);
            }
        }
    }

    config
}

const MENU: &str = "\
==============================
  Rolodex - Main Menu
==============================
1. Add new contact
2. Search contacts
3. List all contacts
4. Update contact
5. Delete contact
6. Generate statistics
7. Find duplicates
8. Export by category
9. Save to file
10. Load from file
11. Merge two contacts
0. Exit
";

fn prompt_id(prompter: &mut impl Prompter, message: &str) -> std::io::Result<ContactId> {
    Ok(ContactId::from(prompter.prompt(message)?.trim()))
}

fn collect_patch(prompter: &mut impl Prompter) -> std::io::Result<ContactPatch> {
    println!("Enter updates below (blank to skip):");
    let mut patch = ContactPatch::new();
    for (label, slot) in [
        ("first_name", &mut patch.first_name),
        ("last_name", &mut patch.last_name),
        ("phone", &mut patch.phone),
        ("email", &mut patch.email),
        ("category", &mut patch.category),
        ("notes", &mut patch.notes),
    ] {
        let answer = prompter.prompt(&format!("{label}: "))?;
        if !answer.trim().is_empty() {
            *slot = Some(answer.trim().to_string());
        }
    }

    println!("-- Address updates (any value replaces the whole address) --");
    let address = Address {
        street: prompter.prompt("street: ")?.trim().to_string(),
        city: prompter.prompt("city: ")?.trim().to_string(),
        state: prompter.prompt("state: ")?.trim().to_string(),
        zip_code: prompter.prompt("zip_code: ")?.trim().to_string(),
    };
    if !address.is_blank() {
        patch.address = Some(address);
    }

    Ok(patch)
}

fn search_menu(book: &ContactBook, prompter: &mut impl Prompter) -> std::io::Result<()> {
    let sub = prompter.prompt("search by (n)ame/(c)ategory/(p)hone: ")?;
    let results = match sub.trim().to_lowercase().as_str() {
        "n" => {
            let term = prompter.prompt("Name contains: ")?;
            book.search_by_name(&term)
        }
        "c" => {
            let category = prompter.prompt("Category: ")?;
            book.search_by_category(&category)
        }
        "p" => {
            let number = prompter.prompt("Phone: ")?;
            book.find_by_phone(&number)
                .map(|(id, contact)| (id.clone(), contact.clone()))
                .into_iter()
                .collect()
        }
        _ => Default::default(),
    };

    println!("Matches: {}", results.len());
    for (id, contact) in &results {
        println!("{}", render::contact_block(id, contact));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = parse_args();
    let mut book = ContactBook::new();
    let mut prompter = ConsolePrompter::new();

    loop {
        println!("{MENU}");
        let choice = prompter.prompt("Choose an option: ")?;
        match choice.trim() {
            "0" => {
                println!("Goodbye!");
                break;
            }
            "1" => {
                let candidate = collect_new_contact(&mut prompter)?;
                match book.insert(candidate) {
                    Ok(id) => println!("Added {id}"),
                    Err(err) => println!("Add failed: {err}"),
                }
            }
            "2" => search_menu(&book, &mut prompter)?,
            "3" => println!("{}", render::roster(&book)),
            "4" => {
                let id = prompt_id(&mut prompter, "Contact ID: ")?;
                let patch = collect_patch(&mut prompter)?;
                match book.update(&id, patch) {
                    Ok(()) => println!("Updated"),
                    Err(err) => println!("Update failed: {err}"),
                }
            }
            "5" => {
                let id = prompt_id(&mut prompter, "Contact ID to delete: ")?;
                let mut confirmer = PromptConfirmer::new(ConsolePrompter::new());
                match book.delete(&id, &mut confirmer) {
                    Ok(()) => println!("Deleted"),
                    Err(err) => println!("Not deleted: {err}"),
                }
            }
            "6" => {
                let stats = book.statistics();
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            "7" => {
                let report = book.find_duplicates();
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            "8" => {
                let category = prompter.prompt("Category to export: ")?;
                println!("{}", book.export_category(&category));
            }
            "9" => {
                let default = config.file.display().to_string();
                let answer = prompter.prompt(&format!("Save filename (default {default}): "))?;
                let path = if answer.trim().is_empty() {
                    config.file.clone()
                } else {
                    PathBuf::from(answer.trim())
                };
                rolodex::save_to_path(&book, &path)
                    .with_context(|| format!("saving contacts to {}", path.display()))?;
                println!("Saved {} contacts", book.len());
            }
            "10" => {
                let default = config.file.display().to_string();
                let answer = prompter.prompt(&format!("Load filename (default {default}): "))?;
                let path = if answer.trim().is_empty() {
                    config.file.clone()
                } else {
                    PathBuf::from(answer.trim())
                };
                book = rolodex::load_from_path(&path)
                    .with_context(|| format!("loading contacts from {}", path.display()))?;
                println!("Loaded {} contacts", book.len());
            }
            "11" => {
                let keep = prompt_id(&mut prompter, "Keep contact ID: ")?;
                let absorb = prompt_id(&mut prompter, "Absorb contact ID: ")?;
                let mut resolver = PromptResolver::new(ConsolePrompter::new());
                match book.merge(&keep, &absorb, &mut resolver) {
                    Ok(survivor) => println!("Merged into {survivor}"),
                    Err(err) => println!("Merge failed: {err}"),
                }
            }
            _ => println!("Invalid choice, try again."),
        }
    }

    Ok(())
}
