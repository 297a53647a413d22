pub mod command;
pub mod run;

pub use run::{run_app, run_menu};

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\nContact Management System")?;
    writeln!(out, "1. Add Contact")?;
    writeln!(out, "2. Search Contact")?;
    writeln!(out, "3. Delete Contact")?;
    writeln!(out, "4. Update Contact")?;
    writeln!(out, "5. Save and Exit")?;
    write!(out, "Enter your choice (1/2/3/4/5): ")?;
    out.flush()?;
    Ok(())
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}, Phone: {}, Email: {}",
        contact.name, contact.phone, contact.email
    )
}

// INPUT FUNCTIONS

/// Reads one trimmed line. `None` once input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Shows `label` and reads the answer. Exhausted input reads as empty,
/// which the field validation then rejects.
pub fn prompt<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    out: &mut W,
) -> Result<String, AppError> {
    write!(out, "{}", label)?;
    out.flush()?;
    Ok(get_input(input)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn get_input_trims_and_detects_end() -> Result<(), AppError> {
        let mut input = Cursor::new("  Ann Lee \r\n");

        assert_eq!(get_input(&mut input)?, Some("Ann Lee".to_string()));
        assert_eq!(get_input(&mut input)?, None);
        Ok(())
    }

    #[test]
    fn prompt_writes_label_and_defaults_to_empty() -> Result<(), AppError> {
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let answer = prompt("Enter the name: ", &mut input, &mut out)?;

        assert_eq!(answer, "");
        assert_eq!(String::from_utf8_lossy(&out), "Enter the name: ");
        Ok(())
    }

    #[test]
    fn contact_display_format() {
        let contact = Contact::new("Ann Lee", "1234567890", "ann@example.com");

        assert_eq!(
            display_contact(&contact),
            "Name: Ann Lee, Phone: 1234567890, Email: ann@example.com"
        );
    }

    #[test]
    fn menu_lists_five_choices() -> Result<(), AppError> {
        let mut out = Vec::new();
        show_menu(&mut out)?;
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("1. Add Contact"));
        assert!(text.contains("5. Save and Exit"));
        assert!(text.ends_with("Enter your choice (1/2/3/4/5): "));
        Ok(())
    }
}
