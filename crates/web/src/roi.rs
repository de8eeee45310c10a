// =============================================================================
// Campana Web - ROI Model
// =============================================================================
// Pure arithmetic behind the pricing page calculator. The component owns the
// input signals and calls `RoiModel::evaluate` on every change.
// =============================================================================

use std::ops::RangeInclusive;

/// Slider ranges for the calculator inputs.
pub const ACCOUNTS_RANGE: RangeInclusive<u32> = 1..=100;
pub const MONTHLY_SPEND_RANGE: RangeInclusive<u32> = 5_000..=100_000;
pub const MONTHLY_SPEND_STEP: u32 = 1_000;
pub const AVG_CPA_RANGE: RangeInclusive<u32> = 10..=200;
pub const WEEKLY_HOURS_RANGE: RangeInclusive<u32> = 1..=40;

const WEEKS_PER_MONTH: f64 = 4.33;

/// Calculator inputs as the sliders report them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiInputs {
    pub accounts: u32,
    pub monthly_spend: u32,
    /// Collected for the visitor's reference; no formula reads it.
    pub avg_cpa: u32,
    pub weekly_hours: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            accounts: 15,
            monthly_spend: 10_000,
            avg_cpa: 50,
            weekly_hours: 15,
        }
    }
}

impl RoiInputs {
    /// Force every field into its slider range, snapping spend to its step.
    pub fn clamped(self) -> Self {
        let spend = clamp(self.monthly_spend, &MONTHLY_SPEND_RANGE);
        let offset = spend - MONTHLY_SPEND_RANGE.start();
        let spend = MONTHLY_SPEND_RANGE.start()
            + (offset + MONTHLY_SPEND_STEP / 2) / MONTHLY_SPEND_STEP * MONTHLY_SPEND_STEP;

        Self {
            accounts: clamp(self.accounts, &ACCOUNTS_RANGE),
            monthly_spend: spend.min(*MONTHLY_SPEND_RANGE.end()),
            avg_cpa: clamp(self.avg_cpa, &AVG_CPA_RANGE),
            weekly_hours: clamp(self.weekly_hours, &WEEKLY_HOURS_RANGE),
        }
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// One plan price, applying up to and including `max_accounts`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanTier {
    pub max_accounts: Option<u32>,
    pub monthly_cost: f64,
}

/// Rates, constants and plan schedule of a calculator variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiModel {
    /// Share of spend recovered per account (0.15 * 0.01).
    pub savings_rate: f64,
    /// Share of manual hours taken over by automation.
    pub automation_share: f64,
    /// Flat monthly copywriting cost avoided.
    pub copy_saved: f64,
    /// Ascending tiers; the last one should be open-ended.
    pub tiers: &'static [PlanTier],
}

const STANDARD_TIERS: [PlanTier; 4] = [
    PlanTier { max_accounts: Some(3), monthly_cost: 150.0 },
    PlanTier { max_accounts: Some(10), monthly_cost: 350.0 },
    PlanTier { max_accounts: Some(30), monthly_cost: 750.0 },
    PlanTier { max_accounts: None, monthly_cost: 1499.0 },
];

impl RoiModel {
    pub const STANDARD: RoiModel = RoiModel {
        savings_rate: 0.0015,
        automation_share: 0.75,
        copy_saved: 4000.0,
        tiers: &STANDARD_TIERS,
    };

    /// Monthly plan cost for an account count.
    pub fn plan_cost(&self, accounts: u32) -> f64 {
        self.tiers
            .iter()
            .find(|tier| tier.max_accounts.map_or(true, |max| accounts <= max))
            .or_else(|| self.tiers.last())
            .map_or(0.0, |tier| tier.monthly_cost)
    }

    pub fn cpa_savings(&self, accounts: u32, monthly_spend: u32) -> f64 {
        f64::from(accounts) * f64::from(monthly_spend) * self.savings_rate
    }

    /// Monthly hours freed, rounded.
    pub fn time_saved_hours(&self, weekly_hours: u32) -> i64 {
        round_half_up(f64::from(weekly_hours) * WEEKS_PER_MONTH * self.automation_share)
    }

    pub fn evaluate(&self, inputs: RoiInputs) -> RoiBreakdown {
        let cpa_savings = self.cpa_savings(inputs.accounts, inputs.monthly_spend);
        let plan_cost = self.plan_cost(inputs.accounts);
        RoiBreakdown {
            cpa_savings,
            time_saved_hours: self.time_saved_hours(inputs.weekly_hours),
            copy_saved: self.copy_saved,
            plan_cost,
            net_roi: round_half_up(cpa_savings + self.copy_saved - plan_cost),
        }
    }
}

impl Default for RoiModel {
    fn default() -> Self {
        RoiModel::STANDARD
    }
}

/// Derived figures shown next to the sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiBreakdown {
    pub cpa_savings: f64,
    pub time_saved_hours: i64,
    pub copy_saved: f64,
    pub plan_cost: f64,
    pub net_roi: i64,
}

/// Rounding with halves toward positive infinity, as browsers round.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_inputs_example() {
        let out = RoiModel::STANDARD.evaluate(RoiInputs::default());
        assert!(close(out.cpa_savings, 225.0));
        assert_eq!(out.time_saved_hours, 49); // 15 * 4.33 * 0.75 = 48.7125
        assert!(close(out.plan_cost, 750.0));
        assert_eq!(out.net_roi, 3475);
    }

    #[test]
    fn test_cpa_savings_formula_over_ranges() {
        let model = RoiModel::STANDARD;
        for accounts in [1, 2, 15, 50, 100] {
            for spend in (5_000..=100_000).step_by(19_000) {
                let got = model.cpa_savings(accounts, spend);
                assert!(close(got, accounts as f64 * spend as f64 * 0.0015));
                assert!(got >= 0.0);
            }
        }
    }

    #[test]
    fn test_time_saved_is_monotonic() {
        let model = RoiModel::STANDARD;
        let mut previous = i64::MIN;
        for hours in WEEKLY_HOURS_RANGE {
            let saved = model.time_saved_hours(hours);
            assert_eq!(saved, round_half_up(hours as f64 * 4.33 * 0.75));
            assert!(saved >= previous);
            previous = saved;
        }
        assert_eq!(model.time_saved_hours(1), 3);
        assert_eq!(model.time_saved_hours(40), 130);
    }

    #[test]
    fn test_plan_cost_breakpoints() {
        let model = RoiModel::STANDARD;
        assert_eq!(model.plan_cost(1), 150.0);
        assert_eq!(model.plan_cost(3), 150.0);
        assert_eq!(model.plan_cost(4), 350.0);
        assert_eq!(model.plan_cost(10), 350.0);
        assert_eq!(model.plan_cost(11), 750.0);
        assert_eq!(model.plan_cost(30), 750.0);
        assert_eq!(model.plan_cost(31), 1499.0);
        assert_eq!(model.plan_cost(100), 1499.0);
    }

    #[test]
    fn test_net_roi_rounding_and_sign() {
        let model = RoiModel::STANDARD;
        // 1 * 5000 * 0.0015 = 7.5 -> 7.5 + 4000 - 150 = 3857.5 -> 3858
        let out = model.evaluate(RoiInputs { accounts: 1, monthly_spend: 5_000, ..RoiInputs::default() });
        assert_eq!(out.net_roi, 3858);

        let lean = RoiModel { copy_saved: 0.0, ..RoiModel::STANDARD };
        // 3 * 5000 * 0.0015 = 22.5 -> 22.5 - 150 = -127.5 -> -127
        let out = lean.evaluate(RoiInputs { accounts: 3, monthly_spend: 5_000, ..RoiInputs::default() });
        assert!(close(out.cpa_savings, 22.5));
        assert_eq!(out.net_roi, -127);
        assert!(out.net_roi < 0);
    }

    #[test]
    fn test_avg_cpa_does_not_change_results() {
        let model = RoiModel::STANDARD;
        let a = model.evaluate(RoiInputs { avg_cpa: 10, ..RoiInputs::default() });
        let b = model.evaluate(RoiInputs { avg_cpa: 200, ..RoiInputs::default() });
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamped_inputs() {
        let inputs = RoiInputs { accounts: 0, monthly_spend: 250_000, avg_cpa: 5, weekly_hours: 90 }.clamped();
        assert_eq!(inputs, RoiInputs { accounts: 1, monthly_spend: 100_000, avg_cpa: 10, weekly_hours: 40 });

        let snapped = RoiInputs { monthly_spend: 12_499, ..RoiInputs::default() }.clamped();
        assert_eq!(snapped.monthly_spend, 12_000);
        let snapped = RoiInputs { monthly_spend: 12_500, ..RoiInputs::default() }.clamped();
        assert_eq!(snapped.monthly_spend, 13_000);
        assert_eq!(RoiInputs::default().clamped(), RoiInputs::default());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.49), 0);
    }
}
