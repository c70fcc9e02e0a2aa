use leptos::*;
use strum::IntoEnumIterator;

use crate::domain::{
    compare_returns, simulate, MarketCondition, RiskProfile, RoiInput, SimulationInput,
};
use crate::error::SiteResult;
use crate::logging::{self, LogComponent};
use crate::summary::{roi_summary, simulation_summary, Summary};

fn input_value(node: NodeRef<html::Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

fn select_value(node: NodeRef<html::Select>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

#[component]
fn SummaryCard(summary: Summary) -> impl IntoView {
    view! {
        <div class="result-card mt-6 rounded-lg bg-slate-800 p-4" aria-live="polite">
            <h4 class="font-semibold mb-2">{summary.heading}</h4>
            {summary
                .lines
                .into_iter()
                .map(|line| view! { <p>{line.label} ": " <strong>{line.value}</strong></p> })
                .collect_view()}
            <p class="micro-copy text-xs text-slate-400 mt-2">{summary.disclaimer}</p>
        </div>
    }
}

fn render_outcome(outcome: SiteResult<Summary>) -> View {
    match outcome {
        Ok(summary) => view! { <SummaryCard summary=summary/> }.into_view(),
        Err(e) => view! { <p class="form-error mt-4 text-red-400" role="alert">{e.to_string()}</p> }
            .into_view(),
    }
}

const FIELD: &str = "w-full p-3 rounded-lg bg-slate-800 border border-slate-600 focus:ring-2 focus:ring-teal-400";

#[component]
pub fn SimulationForm() -> impl IntoView {
    let amount_ref = create_node_ref::<html::Input>();
    let risk_ref = create_node_ref::<html::Select>();
    let years_ref = create_node_ref::<html::Input>();
    let (outcome, set_outcome) = create_signal(None::<SiteResult<Summary>>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let parsed = SimulationInput::parse(
            &input_value(amount_ref),
            &select_value(risk_ref),
            &input_value(years_ref),
        );
        let result = parsed.map(|input| simulation_summary(&input, &simulate(&input)));
        if let Err(e) = &result {
            logging::info(LogComponent::Calculator("simulation"), &format!("rejected input: {}", e));
        }
        set_outcome.set(Some(result));
    };

    view! {
        <form id="simulationForm" class="space-y-4" on:submit=on_submit novalidate>
            <label class="block">
                <span class="block text-sm mb-1">"Investment amount (USD)"</span>
                <input node_ref=amount_ref class=FIELD type="number" name="investmentAmount" min="1" step="any" value="10000"/>
            </label>
            <label class="block">
                <span class="block text-sm mb-1">"Risk tolerance"</span>
                <select node_ref=risk_ref class=FIELD name="riskTolerance">
                    {RiskProfile::iter()
                        .map(|profile| {
                            view! {
                                <option value=profile.key().to_string() selected={profile == RiskProfile::Balanced}>
                                    {profile.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="block">
                <span class="block text-sm mb-1">"Time horizon (years)"</span>
                <input node_ref=years_ref class=FIELD type="number" name="timeHorizon" min="1" max="100" step="1" value="10"/>
            </label>
            <button type="submit" class="bg-teal-500 hover:bg-teal-400 text-slate-950 px-6 py-3 rounded-lg font-medium">
                "Run simulation"
            </button>
            <div id="simulationResults">{move || outcome.get().map(render_outcome)}</div>
        </form>
    }
}

#[component]
pub fn RoiForm() -> impl IntoView {
    let amount_ref = create_node_ref::<html::Input>();
    let years_ref = create_node_ref::<html::Input>();
    let (outcome, set_outcome) = create_signal(None::<SiteResult<Summary>>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = RoiInput::parse(&input_value(amount_ref), &input_value(years_ref))
            .map(|input| roi_summary(&compare_returns(&input)));
        if let Err(e) = &result {
            logging::info(LogComponent::Calculator("roi"), &format!("rejected input: {}", e));
        }
        set_outcome.set(Some(result));
    };

    view! {
        <form id="roiForm" class="space-y-4" on:submit=on_submit novalidate>
            <label class="block">
                <span class="block text-sm mb-1">"Starting capital (USD)"</span>
                <input node_ref=amount_ref class=FIELD type="number" name="roiAmount" min="1" step="any" value="5000"/>
            </label>
            <label class="block">
                <span class="block text-sm mb-1">"Years invested"</span>
                <input node_ref=years_ref class=FIELD type="number" name="roiYears" min="1" max="100" step="1" value="5"/>
            </label>
            <button type="submit" class="bg-teal-500 hover:bg-teal-400 text-slate-950 px-6 py-3 rounded-lg font-medium">
                "Compare returns"
            </button>
            <div id="roiResults">{move || outcome.get().map(render_outcome)}</div>
        </form>
    }
}

/// Select a market regime and show the matching playbook.
#[component]
pub fn MarketPlaybookPanel() -> impl IntoView {
    let (selection, set_selection) = create_signal(None::<SiteResult<MarketCondition>>);

    let on_change = move |ev: ev::Event| {
        let key = event_target_value(&ev);
        let parsed = MarketCondition::parse(&key);
        if let Err(e) = &parsed {
            logging::warn(LogComponent::Playbook, &e.to_string());
        }
        set_selection.set(Some(parsed));
    };

    let response = move || {
        selection.get().map(|parsed| match parsed {
            Ok(condition) => {
                let playbook = condition.playbook();
                view! {
                    <div class="mt-6 rounded-lg bg-slate-800 p-4">
                        <h4 class="font-semibold mb-2">{playbook.heading}</h4>
                        <p class="mb-3">{playbook.summary}</p>
                        <ul class="list-disc pl-5 space-y-1">
                            {playbook
                                .actions
                                .iter()
                                .map(|action| view! { <li>{*action}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }
                .into_view()
            }
            Err(e) => view! { <p class="form-error mt-4 text-red-400" role="alert">{e.to_string()}</p> }
                .into_view(),
        })
    };

    view! {
        <form id="marketForm" on:change=on_change on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
            <label class="block">
                <span class="block text-sm mb-1">"Market condition"</span>
                <select class=FIELD name="marketCondition">
                    <option value="" disabled selected>"Choose a market condition"</option>
                    {MarketCondition::iter()
                        .map(|condition| {
                            view! { <option value=condition.key().to_string()>{condition.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </label>
            <div id="marketResponse">{response}</div>
        </form>
    }
}
