use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gsm_site::{VersionCatalog, VersionRecord};
use serde::Serialize;

use super::print_json;

#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// versions.json to read.
    #[arg(long)]
    pub data: PathBuf,
    /// Compare two versions instead of listing the timelines.
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    pub compare: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Timeline<'a> {
    total_versions: usize,
    total_downloads: u64,
    majors: Vec<&'a VersionRecord>,
    minors: Vec<&'a VersionRecord>,
}

pub fn run(args: &VersionsArgs) -> Result<(), Box<dyn Error>> {
    let catalog = VersionCatalog::load(&args.data)?;
    if let [from, to] = args.compare.as_slice() {
        return print_json(&catalog.compare(from, to)?);
    }
    print_json(&Timeline {
        total_versions: catalog.len(),
        total_downloads: catalog.total_downloads(),
        majors: catalog.majors(),
        minors: catalog.minors(),
    })
}
