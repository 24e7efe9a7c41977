//! Store Module
//!
//! In-memory collections backing the API. Contents live for the lifetime
//! of the process and are rebuilt from seed data on every start.

mod books;
mod users;


pub use books::BookStore;
pub use users::UserStore;
