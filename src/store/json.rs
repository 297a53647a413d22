use super::*;

use crate::config::Config;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub struct JsonStore {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(config: &Config) -> Self {
        Self {
            medium: "json".to_string(),
            path: config.path.clone(),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            // A book that was never saved is simply empty
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no backing file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // An empty file is not a missing one: serde_json rejects it
        let contacts: Vec<Contact> = serde_json::from_str(&data)?;
        debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contact = serde_json::to_string(contacts)?;

        // Write a sibling then rename, so the old file survives a failed write
        let tmp = self.tmp_path();
        if let Err(e) = fs::write(&tmp, json_contact.as_bytes())
            .and_then(|_| fs::rename(&tmp, &self.path))
        {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
