//! Budget recommendations over the latest month of a summary.

use tally_core::Category;

use crate::summary::MonthlySummary;

/// Minimum monthly spend before cut-back suggestions are produced.
const SPEND_FLOOR: f64 = 500.0;

/// A category is a cut-back candidate above this share of monthly spend.
const CUT_BACK_SHARE: f64 = 0.25;

/// Suggested reduction applied to a flagged category's spend.
const SUGGESTED_TRIM: f64 = 0.20;

/// Produce recommendation lines for the latest month.
///
/// `target_savings` is a ratio in `0..=1`; progress toward it is
/// `1 - spend/income` for the latest month.
pub fn recommend(summary: &MonthlySummary, target_savings: Option<f64>) -> Vec<String> {
    let Some((_, stats)) = summary.latest() else {
        return vec!["No data to produce a recommendation.".to_string()];
    };

    let mut lines = Vec::new();
    let spend = stats.spend();
    let income = stats.income();

    // Cut-back candidates: expense categories dominating monthly spend,
    // largest first.
    let mut flagged: Vec<(Category, f64)> = stats
        .by_category
        .iter()
        .filter(|(_, subtotal)| **subtotal < 0.0)
        .map(|(category, subtotal)| (*category, -subtotal))
        .filter(|(_, spent)| spend > SPEND_FLOOR && spent / spend > CUT_BACK_SHARE)
        .collect();
    flagged.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    if flagged.is_empty() {
        lines.push("Spending looks reasonable this month.".to_string());
    } else {
        for (category, spent) in flagged {
            lines.push(format!(
                "Consider reducing spending on {} by about ${:.2} per month.",
                category,
                spent * SUGGESTED_TRIM
            ));
        }
    }

    if let Some(target) = target_savings {
        if income > 0.0 {
            let progress = 1.0 - spend / income;
            if progress >= target {
                lines.push("You are meeting or exceeding your savings target.".to_string());
            } else {
                let shortfall = (target - progress) * income;
                lines.push(format!(
                    "To reach a savings rate of {:.0}%, set aside another ${:.2} per month.",
                    target * 100.0,
                    shortfall
                ));
            }
        } else {
            lines.push(
                "No income recorded for the latest month; savings target not assessed."
                    .to_string(),
            );
        }
    }

    lines
}
