use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gsm_calc::{
    Calculator, CalculatorConfig, ChartSeries, InputEvent, ModelProfile, Notice, ParameterSet,
    ResultPanel, ResultView,
};
use gsm_core::GsmError;

/// Parameter flags shared by the calculator commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// YAML calculator configuration; flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Energy scale in GeV.
    #[arg(long)]
    pub energy: Option<f64>,
    /// Coupling constant.
    #[arg(long)]
    pub coupling: Option<f64>,
    /// Number of extra dimensions (6, 9, 10 or 11).
    #[arg(long)]
    pub dimensions: Option<u32>,
    /// Formula variant: academic or classic.
    #[arg(long)]
    pub profile: Option<ModelProfile>,
}

impl ParamArgs {
    pub fn load_config(&self) -> Result<CalculatorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if let Some(profile) = self.profile {
            config.profile = profile;
        }
        Ok(config)
    }

    /// Slider events equivalent to the overriding flags.
    pub fn events(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if let Some(value) = self.energy {
            events.push(InputEvent::SetEnergy { value });
        }
        if let Some(value) = self.coupling {
            events.push(InputEvent::SetCoupling { value });
        }
        if let Some(value) = self.dimensions {
            events.push(InputEvent::SetDimensions { value });
        }
        events
    }

    /// Calculator rendering into `view` with every override applied.
    pub fn calculator<V: ResultView>(
        &self,
        config: CalculatorConfig,
        view: V,
    ) -> Result<Calculator<V>, Box<dyn Error>> {
        let mut calculator = Calculator::new(config, view)?;
        for event in self.events() {
            calculator.handle(event)?;
        }
        Ok(calculator)
    }
}

/// View that discards every update; reports are read back from the calculator.
#[derive(Debug, Default)]
pub struct Headless;

impl ResultView for Headless {
    fn show_parameters(&mut self, _: &ParameterSet) -> Result<(), GsmError> {
        Ok(())
    }

    fn show_results(&mut self, _: &ResultPanel) -> Result<(), GsmError> {
        Ok(())
    }

    fn show_chart(&mut self, _: &ChartSeries) -> Result<(), GsmError> {
        Ok(())
    }

    fn notify(&mut self, _: &Notice) -> Result<(), GsmError> {
        Ok(())
    }
}
