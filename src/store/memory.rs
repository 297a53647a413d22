use super::*;
use std::cell::{Cell, RefCell};

/// Keeps contacts in memory only. `save` replaces the held snapshot,
/// so a later `load` sees what was last saved.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RefCell<Vec<Contact>>,
    saves: Cell<usize>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            saves: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
