mod handler;
pub mod model;

pub use handler::{generate_faculty_password, login, me};
