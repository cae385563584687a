//! Narrative templates - the pessimist's reality check and the optimist's pitch.

use super::profile::{IndustryProfile, RealityCheck};

/// Share of footfall left in the gym downturn scenario.
const FOOTFALL_DROP_FACTOR: f64 = 0.7;

/// Figures the narrative templates interpolate.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeFigures {
    pub monthly_net_profit: f64,
    pub annual_revenue: f64,
    pub margin_percent: f64,
    pub monthly_rent: f64,
    pub daily_footfall: u32,
}

/// Builds the pessimistic narrative for a profile.
pub fn reality_check(profile: &IndustryProfile, figures: &NarrativeFigures) -> String {
    match profile.reality_check() {
        RealityCheck::FoodCost => format!(
            "Your COGS are {:.1}%. If ingredients go up by 5% or your chef quits, \
             that ${} profit vanishes. Have you accounted for spoilage?",
            profile.cogs_ratio().as_percent(),
            format_whole_amount(figures.monthly_net_profit)
        ),
        RealityCheck::FixedRent => format!(
            "Rent is a fixed killer here. If footfall drops to {}, you still pay full rent. \
             Plus, equipment maintenance will eat your cash flow in Year 2.",
            reduced_footfall(figures.daily_footfall)
        ),
        RealityCheck::AggregatorCommission => "You saved on rent, but the aggregators are \
             taking 30% off the top. You don't own the customer; the app does. \
             One algorithm change and you're invisible."
            .to_string(),
        RealityCheck::LaborRetention => format!(
            "Your labor is {:.1}% of revenue. If your best stylist leaves and takes \
             20 clients, this model collapses.",
            profile.labor_ratio().as_percent()
        ),
        RealityCheck::FootfallDependence => format!(
            "You are banking on {} people every single day. If it rains for a week, \
             do you have the working capital to cover that ${} rent?",
            figures.daily_footfall,
            format_whole_amount(figures.monthly_rent)
        ),
    }
}

/// Builds the optimistic narrative. Industry does not matter here.
pub fn optimistic_pitch(figures: &NarrativeFigures) -> String {
    if figures.monthly_net_profit > 0.0 {
        format!(
            "Look at the upside. We're generating ${} top line. With a {:.1}% margin, \
             this is a scalable cash cow. Put a manager in place, optimize the COGS, \
             and we franchise this to 10 locations in 5 years.",
            format_whole_amount(figures.annual_revenue),
            figures.margin_percent
        )
    } else {
        "Okay, the numbers look rough now, but this is a 'turnaround play.' \
         If we renegotiate rent and double the ticket size through upsells, we flip this asset."
            .to_string()
    }
}

fn reduced_footfall(daily_footfall: u32) -> u64 {
    (f64::from(daily_footfall) * FOOTFALL_DROP_FACTOR) as u64
}

/// Rounds to a whole number and groups thousands with commas: `-8600.4` -> `-8,600`.
///
/// Exact halves round to even (`2.5` -> `2`). Negative amounts keep their
/// sign even when they round to zero (`-0.2` -> `-0`).
pub fn format_whole_amount(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
