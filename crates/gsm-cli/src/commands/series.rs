use std::error::Error;

use clap::Args;
use gsm_calc::{clamp_energy_points, ChartSeries, PredictionSeries};
use serde::Serialize;

use super::params::{Headless, ParamArgs};
use super::print_json;

#[derive(Args, Debug)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Comma separated energy scales in GeV, clamped to the energy domain; defaults to the configured points.
    #[arg(long, value_delimiter = ',')]
    pub points: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct SeriesOutput {
    series: PredictionSeries,
    chart: ChartSeries,
}

pub fn run(args: &SeriesArgs) -> Result<(), Box<dyn Error>> {
    let config = args.params.load_config()?;
    let points = if args.points.is_empty() {
        config.energy_points.clone()
    } else {
        clamp_energy_points(&args.points)
    };
    let profile = config.profile;
    let calculator = args.params.calculator(config, Headless)?;
    let params = calculator.parameters();

    let output = SeriesOutput {
        series: profile.sample_series(
            params.coupling_constant(),
            params.extra_dimensions().get(),
            &points,
        ),
        chart: ChartSeries::build(profile, params, &points),
    };
    print_json(&output)
}
