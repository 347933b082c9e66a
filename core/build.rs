use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CATALOG_PATH: &str = "projects/catalog.toml";

#[derive(Deserialize)]
struct CatalogFile {
    resume_url: Option<String>,
    logo_src: Option<String>,
    projects: Vec<ProjectEntry>,
}

#[derive(Deserialize)]
struct ProjectEntry {
    id: u32,
    name: String,
    category: String,
    description: String,
    image: String,
    preview: Option<String>,
    link: Option<String>,
    role: String,
    tools: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PROJECT_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read project catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse project catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.projects.is_empty() {
        panic!("project catalog {} has no entries", catalog_path.display());
    }

    validate_entries(&catalog.projects, &catalog_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const CATALOG_RESUME_URL: Option<&str> = {};",
        rust_opt_string(catalog.resume_url.as_deref())
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const CATALOG_LOGO_SRC: Option<&str> = {};",
        rust_opt_string(catalog.logo_src.as_deref())
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const PROJECT_CATALOG: &[ProjectRecord] = &[").unwrap();

    for entry in &catalog.projects {
        writeln!(&mut output, "    ProjectRecord {{").unwrap();
        writeln!(&mut output, "        id: {},", entry.id).unwrap();
        writeln!(&mut output, "        name: {},", rust_string(&entry.name)).unwrap();
        writeln!(&mut output, "        category: {},", rust_string(&entry.category)).unwrap();
        writeln!(
            &mut output,
            "        description: {},",
            rust_string(&entry.description)
        )
        .unwrap();
        writeln!(&mut output, "        image: {},", rust_string(&entry.image)).unwrap();
        writeln!(
            &mut output,
            "        preview: {},",
            rust_opt_string(non_blank(entry.preview.as_deref()))
        )
        .unwrap();
        writeln!(
            &mut output,
            "        link: {},",
            rust_opt_string(non_blank(entry.link.as_deref()))
        )
        .unwrap();
        writeln!(&mut output, "        role: {},", rust_string(&entry.role)).unwrap();
        writeln!(&mut output, "        tools: {},", rust_string(&entry.tools)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("project_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PROJECT_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join(DEFAULT_CATALOG_PATH),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_opt_string(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn validate_entries(entries: &[ProjectEntry], catalog_path: &Path) {
    let mut ids = HashSet::new();

    for entry in entries {
        if entry.name.trim().is_empty() {
            panic!(
                "project {} name cannot be empty in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if entry.image.trim().is_empty() {
            panic!(
                "project '{}' image cannot be empty in {}",
                entry.name,
                catalog_path.display()
            );
        }
        if !ids.insert(entry.id) {
            panic!(
                "duplicate project id {} in {}",
                entry.id,
                catalog_path.display()
            );
        }
    }
}
