use folio_core::catalog::{catalog_logo_src, catalog_resume_url};
use folio_core::NavSection;

use crate::dom;

pub(crate) fn resume_url() -> &'static str {
    build_override(
        option_env!("FOLIO_RESUME_URL").or(option_env!("TRUNK_PUBLIC_FOLIO_RESUME_URL")),
    )
    .unwrap_or_else(catalog_resume_url)
}

pub(crate) fn logo_src() -> &'static str {
    build_override(option_env!("FOLIO_LOGO_SRC").or(option_env!("TRUNK_PUBLIC_FOLIO_LOGO_SRC")))
        .unwrap_or_else(catalog_logo_src)
}

fn build_override(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Section named by the location hash, if it names one.
pub(crate) fn initial_section() -> Option<NavSection> {
    let hash = dom::location_hash()?;
    match NavSection::parse(&hash) {
        Ok(section) => Some(section),
        Err(err) => {
            gloo::console::log!("ignoring location hash", hash, err.to_string());
            None
        }
    }
}
