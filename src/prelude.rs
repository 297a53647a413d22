pub use crate::cli::{command, run_app, run_menu};
pub use crate::config::{Config, DEFAULT_STORAGE_PATH};
pub use crate::domain::{
    Command,
    book::ContactBook,
    contact::{self, Contact, ValidationReq},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStore, MemStore};
