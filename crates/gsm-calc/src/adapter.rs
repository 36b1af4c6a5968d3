use std::io::Write;

use chrono::{DateTime, Utc};
use gsm_core::errors::{ErrorInfo, GsmError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::export::ExportDocument;
use crate::format::{fixed, ResultPanel};
use crate::params::{AdjustDirection, AdjustTarget, ExtraDimensions, ParameterSet};
use crate::report::{build_report, PredictionReport};
use crate::series::ChartSeries;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Informational.
    Info,
    /// Completed action.
    Success,
    /// Input was altered.
    Warning,
}

/// Short message for the notification area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Rendering target driven by a [`Calculator`].
pub trait ResultView {
    /// Displays the current inputs.
    fn show_parameters(&mut self, params: &ParameterSet) -> Result<(), GsmError>;

    /// Displays the formatted result cards.
    fn show_results(&mut self, panel: &ResultPanel) -> Result<(), GsmError>;

    /// Redraws the parameter-space chart.
    fn show_chart(&mut self, chart: &ChartSeries) -> Result<(), GsmError>;

    /// Shows a transient notice.
    fn notify(&mut self, notice: &Notice) -> Result<(), GsmError>;
}

/// Input produced by the calculator controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Energy slider moved, in GeV.
    SetEnergy {
        /// Raw slider value.
        value: f64,
    },
    /// Coupling slider moved.
    SetCoupling {
        /// Raw slider value.
        value: f64,
    },
    /// Dimension selector changed.
    SetDimensions {
        /// Raw selector value.
        value: u32,
    },
    /// Step button pressed.
    Adjust {
        /// Parameter to step.
        target: AdjustTarget,
        /// Step direction.
        direction: AdjustDirection,
    },
    /// Explicit recalculation.
    Calculate,
    /// Restore the configured initial parameters.
    Reset,
}

/// Calculator widget state bound to an explicit view.
#[derive(Debug)]
pub struct Calculator<V> {
    config: CalculatorConfig,
    params: ParameterSet,
    report: PredictionReport,
    view: V,
}

impl<V: ResultView> Calculator<V> {
    /// Builds the calculator and renders the initial state into `view`.
    pub fn new(config: CalculatorConfig, view: V) -> Result<Self, GsmError> {
        let params = config.initial;
        let report = build_report(config.profile, &params)?;
        let mut calculator = Self {
            config,
            params,
            report,
            view,
        };
        calculator.render()?;
        Ok(calculator)
    }

    /// Current inputs.
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Latest report.
    pub fn report(&self) -> &PredictionReport {
        &self.report
    }

    /// Construction settings.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Bound view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Releases the bound view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Applies `event`, recomputes and re-renders.
    pub fn handle(&mut self, event: InputEvent) -> Result<&PredictionReport, GsmError> {
        let previous = self.params;
        let mut notices = Vec::new();
        self.params = match event {
            InputEvent::SetEnergy { value } => {
                let next = previous.with_energy(value);
                if next.energy_scale() != value {
                    notices.push(clamp_notice("energy scale", value, next.energy_scale()));
                }
                next
            }
            InputEvent::SetCoupling { value } => {
                let next = previous.with_coupling(value);
                if next.coupling_constant() != value {
                    notices.push(clamp_notice("coupling constant", value, next.coupling_constant()));
                }
                next
            }
            InputEvent::SetDimensions { value } => {
                let dimensions = ExtraDimensions::nearest(value);
                if dimensions.get() != value {
                    notices.push(clamp_notice(
                        "extra dimensions",
                        f64::from(value),
                        f64::from(dimensions.get()),
                    ));
                }
                previous.with_dimensions(dimensions)
            }
            InputEvent::Adjust { target, direction } => previous.adjusted(target, direction),
            InputEvent::Calculate => previous,
            InputEvent::Reset => {
                notices.push(Notice::new(
                    NoticeLevel::Info,
                    "calculator reset to initial parameters",
                ));
                self.config.initial
            }
        };
        for notice in notices.iter().filter(|notice| notice.level == NoticeLevel::Warning) {
            warn!(notice = %notice.message, "input clamped");
        }
        self.report = build_report(self.config.profile, &self.params)?;
        self.render()?;
        for notice in &notices {
            self.view.notify(notice)?;
        }
        Ok(&self.report)
    }

    /// Export document for the latest report, stamped with `at`.
    pub fn export(&self, at: DateTime<Utc>) -> ExportDocument {
        ExportDocument::new(&self.report, at)
    }

    fn render(&mut self) -> Result<(), GsmError> {
        debug!(
            energy = self.params.energy_scale(),
            coupling = self.params.coupling_constant(),
            dimensions = self.params.extra_dimensions().get(),
            profile = %self.config.profile,
            hash = %self.report.report_hash,
            "calculated prediction"
        );
        let panel = ResultPanel::build(&self.report, &self.config.display);
        let chart = ChartSeries::build(self.config.profile, &self.params, &self.config.energy_points);
        self.view.show_parameters(&self.params)?;
        self.view.show_results(&panel)?;
        self.view.show_chart(&chart)
    }
}

fn clamp_notice(field: &str, requested: f64, applied: f64) -> Notice {
    Notice::new(
        NoticeLevel::Warning,
        format!("{field} {requested} is out of range; using {applied}"),
    )
}

/// Plain-text view writing each update to a sink.
#[derive(Debug)]
pub struct TextView<W> {
    out: W,
}

impl<W: Write> TextView<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<(), GsmError> {
        writeln!(self.out, "{text}").map_err(|err| {
            GsmError::Io(ErrorInfo::new("view_write", err.to_string()))
        })
    }
}

impl<W: Write> ResultView for TextView<W> {
    fn show_parameters(&mut self, params: &ParameterSet) -> Result<(), GsmError> {
        self.line(&format!(
            "parameters: E = {} GeV, α = {}, D = {}",
            params.energy_scale(),
            fixed(params.coupling_constant(), 3),
            params.extra_dimensions()
        ))
    }

    fn show_results(&mut self, panel: &ResultPanel) -> Result<(), GsmError> {
        for entry in &panel.entries {
            self.line(&format!(
                "{:<20} {:>20}  confidence {}",
                entry.label, entry.value, entry.confidence_text
            ))?;
        }
        for line in &panel.analysis {
            self.line(&format!("  - {line}"))?;
        }
        Ok(())
    }

    fn show_chart(&mut self, chart: &ChartSeries) -> Result<(), GsmError> {
        self.line(&format!("chart: {} ({} points)", chart.title, chart.labels.len()))
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), GsmError> {
        self.line(&format!("[{:?}] {}", notice.level, notice.message))
    }
}
