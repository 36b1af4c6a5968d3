use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use gsm_calc::{export_file_name, write_export};

use super::params::{Headless, ParamArgs};

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Output file, or an existing directory to receive a dated export.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &ExportArgs) -> Result<(), Box<dyn Error>> {
    let config = args.params.load_config()?;
    let calculator = args.params.calculator(config, Headless)?;
    let now = Utc::now();
    let document = calculator.export(now);

    let path = if args.out.is_dir() {
        args.out.join(export_file_name(now.date_naive()))
    } else {
        args.out.clone()
    };
    write_export(&path, &document)?;
    println!("{}", path.display());
    Ok(())
}
