use std::error::Error;

use clap::Args;
use gsm_calc::export::EXPORT_VERSION;
use gsm_calc::report::REPORT_SCHEMA;
use serde::Serialize;

use super::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the report schema and export format versions as well.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    report_schema: String,
    export_version: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    print_json(&VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        report_schema: REPORT_SCHEMA.to_string(),
        export_version: EXPORT_VERSION.to_string(),
    })
}
