use std::path::PathBuf;

use gsm_site::{Roster, VersionCatalog};

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .canonicalize()
        .unwrap()
}

#[allow(dead_code)]
pub fn fixture_roster() -> Roster {
    Roster::load(&workspace_root().join("fixtures/contributors.json")).unwrap()
}

#[allow(dead_code)]
pub fn fixture_catalog() -> VersionCatalog {
    VersionCatalog::load(&workspace_root().join("fixtures/versions.json")).unwrap()
}
