//! The line-oriented assistant loop.
//!
//! Reads commands from stdin, dispatches them against the address book
//! owned by the caller, and prints the replies. All directory semantics
//! live in [`crate::book`]; this layer only tokenizes and renders.

pub mod commands;

pub use commands::{dispatch, parse_input, Outcome};

use crate::book::AddressBook;
use crate::config::Config;
use std::io::{self, BufRead, Write};
use tracing::info;

const HELP: &str = "\
Welcome to the assistant bot!
Commands:
 - 'hello' or 'start' - to start the conversation
 - 'add <name> <phone>' - to add a contact
 - 'change <name> <old phone> <new phone>' - to change a contact's phone number
 - 'phone <name>' - to get a contact's phone numbers
 - 'all' - to get all contacts
 - 'add-birthday <name> <DD.MM.YYYY>' - to set a contact's birthday
 - 'show-birthday <name>' - to show a contact's birthday
 - 'birthdays' - to list next week's birthdays per weekday
 - 'delete <name>' - to remove a contact
 - 'close' or 'exit' - to exit the bot";

/// Run the command loop until `close`/`exit` or end of input.
///
/// The address book is owned by the caller and mutated in place; nothing
/// here outlives the loop.
pub fn run(book: &mut AddressBook, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", HELP);

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit.
            println!("Good bye!");
            break;
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        let today = chrono::Local::now().date_naive();
        match dispatch(&command, &args, book, today) {
            Outcome::Reply(message) => println!("{}", message),
            Outcome::Exit(message) => {
                println!("{}", message);
                break;
            }
        }
    }

    info!(records = book.len(), "assistant loop finished");
    Ok(())
}
