use super::ui;
use crate::core::config::Profile;
use crate::core::currency::format_usd;
use crate::core::estimator::{self, FundResult};
use anyhow::Result;
use comfy_table::Cell;

/// A profile together with its computed savings tiers.
pub struct ProfileEstimate {
    pub name: String,
    pub result: FundResult,
}

impl ProfileEstimate {
    pub fn from_profile(profile: &Profile) -> Self {
        let input = profile.input.sanitized();
        ProfileEstimate {
            name: profile.name.clone(),
            result: estimator::estimate(&input),
        }
    }

    pub fn display_as_table(&self) -> String {
        let result = &self.result;

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Tier"),
            ui::header_cell("Coverage"),
            ui::header_cell("Amount"),
        ]);
        table.add_row(vec![
            Cell::new("Minimum"),
            ui::months_cell(result.minimum_months),
            ui::currency_cell(result.minimum_fund),
        ]);
        table.add_row(vec![
            Cell::new("Recommended"),
            ui::months_cell(result.recommended_months),
            ui::total_currency_cell(result.recommended_fund),
        ]);
        table.add_row(vec![
            Cell::new("Ideal"),
            ui::months_cell(result.ideal_months),
            ui::currency_cell(result.ideal_fund),
        ]);

        // Profile name at top
        let mut output = format!(
            "Profile: {}\n\n",
            ui::style_text(&self.name, ui::StyleType::Title)
        );

        // Headline recommendation above the tier table
        output.push_str(&format!(
            "Recommended Emergency Fund: {} {}\n\n",
            ui::style_text(&format_usd(result.recommended_fund), ui::StyleType::Hero),
            ui::style_text(
                &format!("({} months of expenses)", result.recommended_months),
                ui::StyleType::Subtle
            )
        ));

        output.push_str(&table.to_string());
        output
    }
}

pub fn run(profiles: &[Profile]) -> Result<()> {
    let estimates: Vec<ProfileEstimate> =
        profiles.iter().map(ProfileEstimate::from_profile).collect();

    let num_estimates = estimates.len();
    for (i, estimate) in estimates.into_iter().enumerate() {
        println!("{}", estimate.display_as_table());
        if i < num_estimates - 1 {
            ui::print_separator();
        }
    }

    Ok(())
}
