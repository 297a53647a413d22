pub mod book;
pub mod contact;

pub use book::ContactBook;
pub use contact::Contact;

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    SearchContact,
    DeleteContact,
    UpdateContact,
    Exit,
}

impl Command {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Command::AddContact),
            "2" => Some(Command::SearchContact),
            "3" => Some(Command::DeleteContact),
            "4" => Some(Command::UpdateContact),
            "5" => Some(Command::Exit),
            _ => None,
        }
    }
}
