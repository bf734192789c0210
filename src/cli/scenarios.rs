use super::plan::{MAX_AGE, MIN_AGE, validate_inputs};
use super::ui;
use crate::core::config::AppConfig;
use crate::core::{RiskProfile, ScenarioPoint, scenario_sweep};
use anyhow::{Result, bail};
use comfy_table::{Cell, Table};
use tracing::info;

/// Age range and step for a scenario sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub from: u32,
    pub to: u32,
    pub step: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        AgeRange {
            from: MIN_AGE,
            to: MAX_AGE,
            step: 5,
        }
    }
}

impl AgeRange {
    /// Ages from `from` to `to` inclusive; `to` is always included even when
    /// the step does not land on it.
    pub fn ages(&self) -> Result<Vec<u32>> {
        if self.step == 0 {
            bail!("Age step must be positive");
        }
        if self.from > self.to {
            bail!("Start age {} is after end age {}", self.from, self.to);
        }
        let mut ages: Vec<u32> = (self.from..=self.to).step_by(self.step as usize).collect();
        if ages.last() != Some(&self.to) {
            ages.push(self.to);
        }
        Ok(ages)
    }
}

pub fn run(
    config: &AppConfig,
    risk_profile: RiskProfile,
    total_investment: f64,
    range: AgeRange,
) -> Result<()> {
    for age in [range.from, range.to] {
        validate_inputs(age, total_investment, config.min_investment)?;
    }
    let ages = range.ages()?;
    info!(%risk_profile, total_investment, count = ages.len(), "Running age scenarios");

    let points = scenario_sweep(ages, risk_profile, total_investment, config.reference_data())?;

    println!(
        "\nScenarios for {} risk profile, investing {}{}\n",
        ui::style_text(&risk_profile.to_string(), ui::StyleType::Title),
        ui::currency_symbol(&config.currency),
        ui::group_thousands(total_investment)
    );
    println!("{}", scenario_table(&points));
    ui::print_separator();
    Ok(())
}

pub fn scenario_table(points: &[ScenarioPoint]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Age"),
        ui::header_cell("Conservative Blend (%)"),
        ui::header_cell("1-Year Value"),
        ui::header_cell("5-Year Value"),
        ui::header_cell("5-Year Gain"),
    ]);

    for point in points {
        table.add_row(vec![
            Cell::new(point.age),
            ui::format_percentage_cell(point.blend_factor * 100.0, |b| format!("{b:.0}")),
            ui::money_cell(point.one_year_total),
            ui::money_cell(point.five_year_total),
            ui::gain_cell(point.five_year_gain),
        ]);
    }
    table
}
