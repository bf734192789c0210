use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Plan, RiskProfile, build_plan};
use anyhow::{Result, bail};
use comfy_table::{Cell, Table};
use tracing::info;

/// Ages the planner offers recommendations for.
pub const MIN_AGE: u32 = 20;
pub const MAX_AGE: u32 = 70;

const BAR_WIDTH: usize = 30;

/// Checks investor inputs against the ranges the planner supports.
pub fn validate_inputs(age: u32, total_investment: f64, min_investment: f64) -> Result<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        bail!("Age must be between {MIN_AGE} and {MAX_AGE}, got {age}");
    }
    if !total_investment.is_finite() || total_investment < min_investment {
        bail!(
            "Total investment must be at least {}, got {}",
            ui::group_thousands(min_investment),
            total_investment
        );
    }
    Ok(())
}

pub fn run(
    config: &AppConfig,
    age: u32,
    risk_profile: RiskProfile,
    total_investment: f64,
    json: bool,
) -> Result<()> {
    validate_inputs(age, total_investment, config.min_investment)?;
    info!(age, %risk_profile, total_investment, "Building allocation plan");

    let plan = build_plan(age, risk_profile, total_investment, config.reference_data())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", render_plan(&plan, &config.currency));
    }
    Ok(())
}

impl Plan {
    pub fn display_as_table(&self, currency: &str) -> String {
        self.allocation_table(currency).to_string()
    }

    pub fn allocation_table(&self, currency: &str) -> Table {
        let symbol = ui::currency_symbol(currency);
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Asset Class"),
            ui::header_cell("Allocation (%)"),
            ui::header_cell(""),
            ui::header_cell("Expected Return (%)"),
            ui::header_cell(&format!("Amount ({symbol})")),
            ui::header_cell(&format!("1-Year ({symbol})")),
            ui::header_cell(&format!("5-Year ({symbol})")),
        ]);

        for row in &self.projection.rows {
            table.add_row(vec![
                Cell::new(row.asset.name()),
                ui::format_percentage_cell(row.weight, |w| format!("{w:.2}")),
                Cell::new(ui::style_text(
                    &ui::weight_bar(row.weight, BAR_WIDTH),
                    ui::StyleType::Subtle,
                )),
                Cell::new(format!("{:.1}", row.expected_return)),
                ui::money_cell(row.amount),
                ui::money_cell(row.one_year),
                ui::money_cell(row.five_year),
            ]);
        }

        table
    }

    pub fn summary_table(&self, currency: &str) -> Table {
        let symbol = ui::currency_symbol(currency);
        let summary = &self.projection.summary;

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Total Investment"),
            ui::header_cell("Projected Value (1 Year)"),
            ui::header_cell("Projected Value (5 Years)"),
        ]);
        let total_cell = |value: f64| {
            Cell::new(ui::style_text(
                &format!("{symbol}{}", ui::group_thousands(value)),
                ui::StyleType::TotalValue,
            ))
        };
        table.add_row(vec![
            Cell::new(ui::style_text(
                &format!("{symbol}{}", ui::group_thousands(summary.total_investment)),
                ui::StyleType::TotalLabel,
            )),
            total_cell(summary.one_year_total),
            total_cell(summary.five_year_total),
        ]);
        table.add_row(vec![
            Cell::new(""),
            ui::gain_cell(summary.one_year_gain),
            ui::gain_cell(summary.five_year_gain),
        ]);
        table
    }

    /// Summary table followed by the equity/debt split line.
    pub fn display_summary(&self, currency: &str) -> String {
        let mut output = self.summary_table(currency).to_string();

        let split = self
            .allocation
            .category_breakdown()
            .iter()
            .map(|(category, weight)| {
                let (name, emoji) = category.display_info();
                format!("{emoji} {name} {weight:.2}%")
            })
            .collect::<Vec<_>>()
            .join("   ");
        output.push_str(&format!("\n\n{split}"));
        output
    }
}

/// Allocation philosophy notes for a risk profile as a bulleted block.
pub fn render_philosophy(risk_profile: RiskProfile) -> String {
    risk_profile
        .philosophy()
        .iter()
        .map(|line| format!("  - {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_plan(plan: &Plan, currency: &str) -> String {
    let allocation = &plan.allocation;
    let mut output = format!(
        "\n{}\n\n",
        ui::style_text(
            "Recommended Portfolio Allocation & Return Forecast",
            ui::StyleType::Title
        )
    );
    output.push_str(&format!(
        "Age: {}   Risk Profile: {}   Conservative blend: {:.0}%\n\n",
        allocation.age,
        allocation.risk_profile,
        allocation.blend_factor * 100.0
    ));
    output.push_str(&plan.display_as_table(currency));

    output.push_str(&format!(
        "\n\n{}\n\n",
        ui::style_text("Portfolio Summary", ui::StyleType::Title)
    ));
    output.push_str(&plan.display_summary(currency));

    output.push_str(&format!(
        "\n\n{} ({})\n\n",
        ui::style_text("Allocation Philosophy", ui::StyleType::Title),
        ui::style_text(&allocation.risk_profile.to_string(), ui::StyleType::TotalLabel)
    ));
    output.push_str(&render_philosophy(allocation.risk_profile));
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            "Projected returns are estimates based on average market data. Not financial advice.",
            ui::StyleType::Subtle
        )
    ));
    output
}
