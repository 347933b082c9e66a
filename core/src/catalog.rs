use crate::project::ProjectRecord;

include!(concat!(env!("OUT_DIR"), "/project_catalog.rs"));

pub const DEFAULT_RESUME_URL: &str =
    "https://drive.google.com/file/d/1YGfROKPO4AKmrUz_ByXeNYGPSexZ9gIi/view?usp=drive_link";
pub const DEFAULT_LOGO_SRC: &str = "/assets/logo-black.svg";

pub fn project_by_id(id: u32) -> Option<&'static ProjectRecord> {
    PROJECT_CATALOG.iter().find(|project| project.id == id)
}

pub fn catalog_resume_url() -> &'static str {
    CATALOG_RESUME_URL.unwrap_or(DEFAULT_RESUME_URL)
}

pub fn catalog_logo_src() -> &'static str {
    CATALOG_LOGO_SRC.unwrap_or(DEFAULT_LOGO_SRC)
}
