use std::error::Error;
use std::io;

use clap::Args;
use gsm_calc::{ResultPanel, ResultView, TextView};

use super::params::{Headless, ParamArgs};
use super::print_json;

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Print the result cards instead of the JSON report.
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: &PredictArgs) -> Result<(), Box<dyn Error>> {
    let config = args.params.load_config()?;
    let display = config.display.clone();
    let calculator = args.params.calculator(config, Headless)?;
    let report = calculator.report();

    if !args.text {
        return print_json(report);
    }
    let mut view = TextView::new(io::stdout().lock());
    view.show_parameters(calculator.parameters())?;
    view.show_results(&ResultPanel::build(report, &display))?;
    Ok(())
}
