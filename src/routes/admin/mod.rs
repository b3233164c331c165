mod handler;
pub mod model;

pub use handler::{
    academic_years, departments, export_all_excel, export_all_pdf, export_faculty_pdf,
    faculty_details, list_faculty,
};
