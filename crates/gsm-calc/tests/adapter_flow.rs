use gsm_calc::{
    AdjustDirection, AdjustTarget, Calculator, CalculatorConfig, ChartSeries, DisplayOptions,
    ExtraDimensions, InputEvent, ModelProfile, Notice, NoticeLevel, ParameterSet, ResultField,
    ResultPanel, ResultView, TextView,
};
use gsm_core::errors::GsmError;

#[derive(Debug, Default)]
struct RecordingView {
    parameters: Vec<ParameterSet>,
    panels: Vec<ResultPanel>,
    charts: Vec<ChartSeries>,
    notices: Vec<Notice>,
}

impl ResultView for RecordingView {
    fn show_parameters(&mut self, params: &ParameterSet) -> Result<(), GsmError> {
        self.parameters.push(*params);
        Ok(())
    }

    fn show_results(&mut self, panel: &ResultPanel) -> Result<(), GsmError> {
        self.panels.push(panel.clone());
        Ok(())
    }

    fn show_chart(&mut self, chart: &ChartSeries) -> Result<(), GsmError> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), GsmError> {
        self.notices.push(notice.clone());
        Ok(())
    }
}

#[test]
fn construction_renders_initial_state() {
    let calculator = Calculator::new(CalculatorConfig::default(), RecordingView::default()).unwrap();
    let view = calculator.view();
    assert_eq!(view.parameters, vec![ParameterSet::default()]);
    assert_eq!(view.panels.len(), 1);
    assert_eq!(view.charts.len(), 1);
    assert!(view.notices.is_empty());

    let panel = &view.panels[0];
    assert_eq!(panel.entries.len(), 4);
    assert_eq!(panel.entries[0].value, "0.354 TeV");
    assert_eq!(panel.entries[1].value, "6.40e-17 pb");
    assert_eq!(panel.entries[2].value, "5.0 MeV");
    assert_eq!(panel.entries[3].value, "0.120 GeV/cm³");
    assert_eq!(panel.entries[2].confidence_text, "100%");
    assert_eq!(view.charts[0].labels.len(), 5);
}

#[test]
fn out_of_range_input_is_clamped_with_warning() {
    let mut calculator =
        Calculator::new(CalculatorConfig::default(), RecordingView::default()).unwrap();
    let report = calculator
        .handle(InputEvent::SetEnergy { value: 20_000.0 })
        .unwrap();
    assert_eq!(report.parameters.energy_scale(), 10_000.0);

    calculator.handle(InputEvent::SetDimensions { value: 10 }).unwrap();
    assert_eq!(calculator.parameters().extra_dimensions(), ExtraDimensions::Ten);

    let notices = &calculator.view().notices;
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
}

#[test]
fn adjust_then_reset_restores_configured_initial_parameters() {
    let config = CalculatorConfig {
        initial: ParameterSet::new(5000.0, 0.05, ExtraDimensions::Eleven),
        ..CalculatorConfig::default()
    };
    let mut calculator = Calculator::new(config, RecordingView::default()).unwrap();
    calculator
        .handle(InputEvent::Adjust {
            target: AdjustTarget::Energy,
            direction: AdjustDirection::Increase,
        })
        .unwrap();
    assert_eq!(calculator.parameters().energy_scale(), 5100.0);

    let before = calculator.report().report_hash.clone();
    calculator.handle(InputEvent::Calculate).unwrap();
    assert_eq!(calculator.report().report_hash, before);

    calculator.handle(InputEvent::Reset).unwrap();
    assert_eq!(calculator.parameters().energy_scale(), 5000.0);
    let view = calculator.into_view();
    assert_eq!(view.panels.len(), 4);
    let reset = view.notices.last().unwrap();
    assert_eq!(reset.level, NoticeLevel::Info);
    assert_eq!(reset.message, "calculator reset to initial parameters");
}

#[test]
fn display_options_select_cards() {
    let config = CalculatorConfig {
        profile: ModelProfile::Classic,
        display: DisplayOptions {
            fields: vec![ResultField::ResonanceMass, ResultField::DarkMatterDensity],
            show_analysis: false,
        },
        ..CalculatorConfig::default()
    };
    let calculator = Calculator::new(config, RecordingView::default()).unwrap();
    let panel = &calculator.view().panels[0];
    assert_eq!(panel.entries.len(), 2);
    assert_eq!(panel.entries[0].value, "2.50 ± 0.05 TeV");
    assert_eq!(panel.entries[1].value, "0.12 GeV/cm³");
    assert!(panel.analysis.is_empty());
}

#[test]
fn text_view_writes_panel_lines() {
    let calculator =
        Calculator::new(CalculatorConfig::default(), TextView::new(Vec::new())).unwrap();
    let output = String::from_utf8(calculator.into_view().into_inner()).unwrap();
    assert!(output.starts_with("parameters: E = 2500 GeV, α = 0.020, D = 9"));
    assert!(output.contains("Resonance mass"));
    assert!(output.contains("Search for a resonance near 0.4 TeV"));
    assert!(output.contains("chart: Predictions versus energy scale (5 points)"));
}
