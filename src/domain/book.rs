use super::contact::{Contact, ValidationReq, names_match};
use crate::errors::AppError;
use crate::store::ContactStore;
use tracing::{debug, info};

/// The in-memory contact sequence plus the store it is mirrored to.
///
/// Every successful mutation is written through to the store before the
/// call returns. Rejected operations leave both the sequence and the store
/// untouched.
pub struct ContactBook {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    /// Loads the full sequence once from `storage`.
    pub fn open(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mem = storage.load()?;
        debug!(
            medium = storage.get_medium(),
            count = mem.len(),
            "contact book opened"
        );
        Ok(Self { mem, storage })
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str, email: &str) -> Result<(), AppError> {
        let new_contact = Contact::new(name, phone, email);
        new_contact.validate()?;

        if self.mem.iter().any(|c| c.name_matches(&new_contact.name)) {
            return Err(AppError::Validation(ValidationReq::already_exists(
                &new_contact.name,
            )));
        }

        info!(name = %new_contact.name, "adding contact");
        self.mem.push(new_contact);
        self.save()
    }

    /// Every contact whose name matches, in stored order.
    pub fn search_contact(&self, name: &str) -> Result<Vec<&Contact>, AppError> {
        let name = require_name(name)?;

        let found: Vec<&Contact> = self.mem.iter().filter(|c| c.name_matches(name)).collect();
        if found.is_empty() {
            return Err(AppError::NotFound(name.to_string()));
        }
        Ok(found)
    }

    /// Replaces phone and email on the first match. The stored name is kept as is.
    pub fn update_contact(&mut self, name: &str, phone: &str, email: &str) -> Result<(), AppError> {
        let replacement = Contact::new(name, phone, email);
        replacement.validate()?;

        let contact = self
            .mem
            .iter_mut()
            .find(|c| names_match(&c.name, &replacement.name))
            .ok_or_else(|| AppError::NotFound(replacement.name.clone()))?;

        contact.phone = replacement.phone;
        contact.email = replacement.email;

        info!(name = %contact.name, "updated contact");
        self.save()
    }

    /// Removes all matches and returns how many went. Zero matches still
    /// counts as success.
    pub fn delete_contact(&mut self, name: &str) -> Result<usize, AppError> {
        let name = require_name(name)?;

        let before = self.mem.len();
        self.mem.retain(|c| !c.name_matches(name));
        let removed = before - self.mem.len();

        if removed == 0 {
            debug!(name, "delete matched no contact");
            return Ok(0);
        }

        info!(name, removed, "deleted contact");
        self.save()?;
        Ok(removed)
    }
}

fn require_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(ValidationReq::empty_name()));
    }
    Ok(name)
}
