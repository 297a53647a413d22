use super::{display_contact, get_input, prompt, show_menu};
use crate::{
    config::Config,
    domain::{Command, ContactBook},
    errors::AppError,
    store::JsonStore,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

pub fn run_app(config: &Config) -> Result<(), AppError> {
    let storage = JsonStore::new(config);
    let mut book = ContactBook::open(Box::new(storage)).inspect_err(|e| {
        error!(path = %config.path.display(), "could not load contact book: {e}");
    })?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    run_menu(&mut book, &mut input, &mut out).inspect_err(|e| {
        error!("contact book session aborted: {e}");
    })
}

/// Drives the menu until choice 5 or end of input.
/// User mistakes are printed and the loop carries on; anything else is returned.
pub fn run_menu<R: BufRead, W: Write>(
    book: &mut ContactBook,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    loop {
        show_menu(out)?;

        let Some(choice) = get_input(input)? else {
            debug!("input closed, treating as exit");
            return save_and_exit(book, out);
        };

        let result = match Command::parse(&choice) {
            Some(Command::AddContact) => add(book, input, out),
            Some(Command::SearchContact) => search(book, input, out),
            Some(Command::DeleteContact) => delete(book, input, out),
            Some(Command::UpdateContact) => update(book, input, out),
            Some(Command::Exit) => return save_and_exit(book, out),
            None => Err(AppError::ParseCommand(choice)),
        };

        match result {
            Ok(()) => {}
            Err(AppError::ParseCommand(cmd)) => {
                debug!(choice = %cmd, "unrecognized menu choice");
                writeln!(out, "Invalid choice. Please try again.")?;
            }
            Err(e @ AppError::NotFound(_)) => writeln!(out, "{}", e)?,
            Err(e) if e.is_recoverable() => writeln!(out, "Error: {}", e)?,
            Err(e) => return Err(e),
        }
    }
}

fn add<R: BufRead, W: Write>(
    book: &mut ContactBook,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let name = prompt("Enter the name: ", input, out)?;
    let phone = prompt("Enter the phone number: ", input, out)?;
    let email = prompt("Enter the email address: ", input, out)?;

    book.add_contact(&name, &phone, &email)?;
    writeln!(out, "Contact '{}' added successfully.", name)?;
    Ok(())
}

fn search<R: BufRead, W: Write>(
    book: &mut ContactBook,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let name = prompt("Enter the name to search: ", input, out)?;

    for contact in book.search_contact(&name)? {
        writeln!(out, "{}", display_contact(contact))?;
    }
    writeln!(out, "Contact '{}' found successfully.", name)?;
    Ok(())
}

fn delete<R: BufRead, W: Write>(
    book: &mut ContactBook,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let name = prompt("Enter the name to delete: ", input, out)?;

    book.delete_contact(&name)?;
    writeln!(out, "Contact '{}' deleted successfully.", name)?;
    Ok(())
}

fn update<R: BufRead, W: Write>(
    book: &mut ContactBook,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let name = prompt("Enter the name to update: ", input, out)?;
    let phone = prompt("Enter the updated phone number: ", input, out)?;
    let email = prompt("Enter the updated email address: ", input, out)?;

    book.update_contact(&name, &phone, &email)?;
    writeln!(out, "Contact '{}' updated successfully.", name)?;
    Ok(())
}

fn save_and_exit<W: Write>(book: &ContactBook, out: &mut W) -> Result<(), AppError> {
    book.save()?;
    writeln!(out, "\nExiting the Contact Management System. Goodbye!")?;
    Ok(())
}
