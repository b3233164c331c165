mod handler;
pub mod model;

pub use handler::{
    add_award, add_conference, add_patent, add_publication, add_research_project, all_data,
    delete_publication, export_my_pdf, get_profile, list_awards, list_conferences, list_patents,
    list_publications, list_research_projects, update_profile,
};
