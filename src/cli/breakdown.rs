use super::ui;
use crate::core::config::Profile;
use crate::core::estimator::{self, FundInput, MonthsBreakdown};
use anyhow::Result;
use comfy_table::Cell;

/// A profile's coverage month ledger and savings summary.
struct ProfileBreakdown {
    name: String,
    input: FundInput,
    months: MonthsBreakdown,
}

impl ProfileBreakdown {
    fn from_profile(profile: &Profile) -> Self {
        let input = profile.input.sanitized();
        ProfileBreakdown {
            name: profile.name.clone(),
            input,
            months: estimator::breakdown(&input),
        }
    }

    fn display_as_table(&self) -> String {
        let months = &self.months;
        let recommended_months = months.recommended_months();
        let target = f64::from(recommended_months) * self.input.monthly_expenses;

        // Ledger of contributing factors
        let mut factors = ui::new_styled_table();
        factors.set_header(vec![
            ui::header_cell("Factor"),
            ui::header_cell("Answer"),
            ui::header_cell("Months"),
        ]);
        factors.add_row(vec![
            Cell::new("Income stability"),
            Cell::new(self.input.income_stability.to_string()),
            ui::months_cell(months.base_months as u32),
        ]);
        factors.add_row(vec![
            Cell::new("Dependents"),
            Cell::new(if self.input.has_dependents { "yes" } else { "no" }),
            ui::adjustment_cell(months.dependents_adjustment),
        ]);
        factors.add_row(vec![
            Cell::new("Risk tolerance"),
            Cell::new(self.input.risk_tolerance.to_string()),
            ui::adjustment_cell(months.risk_adjustment),
        ]);

        // Savings summary
        let mut summary = ui::new_styled_table();
        summary.set_header(vec![ui::header_cell("Category"), ui::header_cell("Amount")]);
        summary.add_row(vec![
            Cell::new("Monthly Expenses"),
            ui::currency_cell(self.input.monthly_expenses),
        ]);
        summary.add_row(vec![
            Cell::new("Coverage Months"),
            ui::months_cell(recommended_months),
        ]);
        summary.add_row(vec![
            Cell::new("Total Savings Target"),
            ui::total_currency_cell(target),
        ]);

        let mut output = format!(
            "Profile: {}\n\n",
            ui::style_text(&self.name, ui::StyleType::Title)
        );
        output.push_str(&factors.to_string());

        if months.floor_applied() {
            output.push_str(&format!(
                "\n{}",
                ui::style_text(
                    &format!(
                        "Raised from {} to the {} month minimum.",
                        months.unfloored_total(),
                        estimator::MINIMUM_MONTHS
                    ),
                    ui::StyleType::Subtle
                )
            ));
        }

        output.push_str(&format!(
            "\n\n{}\n\n",
            ui::style_text("Savings Breakdown", ui::StyleType::TotalLabel)
        ));
        output.push_str(&summary.to_string());
        output
    }
}

pub fn run(profiles: &[Profile]) -> Result<()> {
    let breakdowns: Vec<ProfileBreakdown> = profiles
        .iter()
        .map(ProfileBreakdown::from_profile)
        .collect();

    let num_breakdowns = breakdowns.len();
    for (i, breakdown) in breakdowns.into_iter().enumerate() {
        println!("{}", breakdown.display_as_table());
        if i < num_breakdowns - 1 {
            ui::print_separator();
        }
    }

    Ok(())
}
