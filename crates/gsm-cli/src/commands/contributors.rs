use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gsm_site::{Contributor, RoleFilter, Roster, RosterStats};
use serde::Serialize;

use super::print_json;

#[derive(Args, Debug)]
pub struct ContributorsArgs {
    /// contributors.json to read.
    #[arg(long)]
    pub data: PathBuf,
    /// Role filter: all, core, advisor or community.
    #[arg(long, default_value = "all")]
    pub filter: RoleFilter,
}

#[derive(Debug, Serialize)]
struct WallEntry<'a> {
    #[serde(flatten)]
    contributor: &'a Contributor,
    share_pct: u64,
    core_badge: bool,
}

#[derive(Debug, Serialize)]
struct WallOutput<'a> {
    filter: RoleFilter,
    stats: RosterStats,
    contributors: Vec<WallEntry<'a>>,
}

pub fn run(args: &ContributorsArgs) -> Result<(), Box<dyn Error>> {
    let roster = Roster::load(&args.data)?;
    let contributors = roster
        .filter(args.filter)
        .into_iter()
        .map(|contributor| WallEntry {
            contributor,
            share_pct: roster.contribution_percentage(contributor.contributions),
            core_badge: contributor.is_core_badge(),
        })
        .collect();
    print_json(&WallOutput {
        filter: args.filter,
        stats: roster.stats(),
        contributors,
    })
}
