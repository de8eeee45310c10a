// =============================================================================
// Campana Web - ROI Calculator
// =============================================================================
// Four sliders feeding `RoiModel::evaluate`; every output is derived from a
// single memo so the figures always agree with each other.
// =============================================================================

use std::ops::RangeInclusive;

use leptos::prelude::*;

use crate::i18n::{Locale, Translator};
use crate::roi::{
    round_half_up, RoiBreakdown, RoiInputs, RoiModel, ACCOUNTS_RANGE, AVG_CPA_RANGE, MONTHLY_SPEND_RANGE,
    MONTHLY_SPEND_STEP, WEEKLY_HOURS_RANGE,
};
use crate::utils::{format_amount, format_signed, format_thousands};

/// Slider state; every read of `breakdown` evaluates the model afresh.
#[derive(Clone, Copy)]
struct RoiSliders {
    accounts: RwSignal<u32>,
    monthly_spend: RwSignal<u32>,
    avg_cpa: RwSignal<u32>,
    weekly_hours: RwSignal<u32>,
    model: RoiModel,
}

impl RoiSliders {
    fn new(model: RoiModel) -> Self {
        let defaults = RoiInputs::default();
        Self {
            accounts: RwSignal::new(defaults.accounts),
            monthly_spend: RwSignal::new(defaults.monthly_spend),
            avg_cpa: RwSignal::new(defaults.avg_cpa),
            weekly_hours: RwSignal::new(defaults.weekly_hours),
            model,
        }
    }

    fn breakdown(self) -> RoiBreakdown {
        let inputs = RoiInputs {
            accounts: self.accounts.get(),
            monthly_spend: self.monthly_spend.get(),
            avg_cpa: self.avg_cpa.get(),
            weekly_hours: self.weekly_hours.get(),
        };
        self.model.evaluate(inputs.clamped())
    }
}

/// Interactive savings estimate on the pricing page.
#[component]
pub fn RoiCalculator(t: Translator) -> impl IntoView {
    let sliders = RoiSliders::new(RoiModel::STANDARD);
    let RoiSliders { accounts, monthly_spend, avg_cpa, weekly_hours, .. } = sliders;
    let breakdown = move || sliders.breakdown();
    let locale = t.locale();

    let hours_label = t.t("pricing.roiHoursLabel");
    let hours_label_out = hours_label.clone();
    let per_month = t.t("common.perMonth");

    view! {
        <div class="roi-calculator">
            <h2 class="roi-title">{t.t("pricing.roiH2")}</h2>
            <div class="roi-grid">
                <div class="roi-inputs">
                    <RangeInput label=t.t("pricing.roiAccounts") value=accounts range=ACCOUNTS_RANGE locale=locale />
                    <RangeInput
                        label=t.t("pricing.roiSpend")
                        value=monthly_spend
                        range=MONTHLY_SPEND_RANGE
                        step=MONTHLY_SPEND_STEP
                        locale=locale
                    />
                    <RangeInput label=t.t("pricing.roiCpa") value=avg_cpa range=AVG_CPA_RANGE locale=locale />
                    <RangeInput
                        label=t.t("pricing.roiHours")
                        unit=hours_label
                        value=weekly_hours
                        range=WEEKLY_HOURS_RANGE
                        locale=locale
                    />
                </div>

                <div class="roi-results">
                    <div class="roi-result">
                        <p class="roi-result-label">{t.t("pricing.roiSavings")}</p>
                        <p class="roi-result-value positive">
                            {move || format_amount(round_half_up(breakdown().cpa_savings), locale)}
                        </p>
                    </div>
                    <div class="roi-result">
                        <p class="roi-result-label">{t.t("pricing.roiTime")}</p>
                        <p class="roi-result-value accent">
                            {move || format!("{} {}", breakdown().time_saved_hours, hours_label_out)}
                        </p>
                    </div>
                    <div class="roi-result">
                        <p class="roi-result-label">{t.t("pricing.roiCopySaved")}</p>
                        <p class="roi-result-value">
                            {move || format!("~{}", format_amount(round_half_up(breakdown().copy_saved), locale))}
                        </p>
                    </div>
                    <div class="roi-result">
                        <p class="roi-result-label">{t.t("pricing.roiCampanaCost")}</p>
                        <p class="roi-result-value muted">
                            {move || format_amount(round_half_up(breakdown().plan_cost), locale)}
                        </p>
                    </div>
                    <div class="roi-result roi-net">
                        <p class="roi-result-label">{t.t("pricing.roiNet")}</p>
                        <p class="roi-result-value" class:negative=move || breakdown().net_roi < 0>
                            {move || format!("{} {}", format_signed(breakdown().net_roi, locale), per_month)}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Labelled slider bound to one calculator input.
#[component]
fn RangeInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] unit: String,
    value: RwSignal<u32>,
    range: RangeInclusive<u32>,
    #[prop(default = 1)] step: u32,
    locale: Locale,
) -> impl IntoView {
    let (min, max) = (*range.start(), *range.end());

    view! {
        <div class="roi-field">
            <label class="roi-label">
                {label}": "
                <strong>{move || format_thousands(i64::from(value.get()), locale)}</strong>
                " "{unit}
            </label>
            <input
                type="range"
                class="roi-range"
                min=min
                max=max
                step=step
                prop:value=move || value.get().to_string()
                on:input=move |e| {
                    match event_target_value(&e).parse::<u32>() {
                        Ok(v) => value.set(v.clamp(min, max)),
                        Err(err) => log::warn!("Ignoring slider value: {err}"),
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_follows_sliders() {
        let owner = Owner::new();
        owner.with(|| {
            let sliders = RoiSliders::new(RoiModel::STANDARD);
            let initial = sliders.breakdown();
            assert_eq!(initial.net_roi, 3475);
            assert_eq!(initial.plan_cost, 750.0);

            sliders.accounts.set(31);
            assert_eq!(sliders.breakdown().plan_cost, 1499.0);

            // Out-of-range values are clamped before evaluation
            sliders.weekly_hours.set(400);
            assert_eq!(sliders.breakdown().time_saved_hours, 130);

            sliders.accounts.set(15);
            sliders.weekly_hours.set(15);
            assert_eq!(sliders.breakdown(), initial);
        });
    }
}
