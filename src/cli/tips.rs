use super::ui;
use console::style;

const FUND_TIPS: [&str; 4] = [
    "Keep emergency funds in a high-yield savings account for easy access",
    "Start with a goal of 1 month, then build up gradually",
    "Automate transfers to your emergency fund each payday",
    "Only use emergency funds for true emergencies: job loss, medical bills, major repairs",
];

const GUIDANCE: &str = "\
This calculator provides estimates for recommended emergency fund amounts
based on your monthly expenses, income stability, dependents, and risk
tolerance. General guidelines suggest 3-6 months of expenses, though
individual situations vary. These figures are estimates only and should not
replace personalized financial planning. Consider consulting a financial
advisor for guidance tailored to your specific circumstances.";

/// Prints the static guidance content. Needs no configuration.
pub fn run() {
    println!(
        "{}",
        ui::style_text("Emergency Fund Tips", ui::StyleType::Title)
    );
    println!();
    for tip in FUND_TIPS {
        println!("  {} {}", style("•").cyan(), tip);
    }

    println!();
    println!(
        "{}",
        ui::style_text("How the estimate works", ui::StyleType::TotalLabel)
    );
    println!();
    println!("{GUIDANCE}");
    println!();
    println!(
        "{}",
        ui::style_text("Estimates only. Not financial advice.", ui::StyleType::Subtle)
    );
}
