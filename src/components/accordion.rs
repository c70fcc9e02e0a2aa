use leptos::*;

use crate::toggle::ToggleState;

pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "faq-models",
        question: "How does CAPPY decide when to rebalance?",
        answer: "Regime classifiers score every market session. Allocations shift only when \
                 the signal persists long enough to clear turnover and tax thresholds.",
    },
    FaqEntry {
        id: "faq-risk",
        question: "Can I cap the downside I am willing to accept?",
        answer: "Yes. Each portfolio carries a drawdown guardrail that tightens hedges and \
                 raises cash buffers before the limit is reached.",
    },
    FaqEntry {
        id: "faq-custody",
        question: "Where are my assets held?",
        answer: "Assets stay with a qualified third-party custodian in your name. CAPPY \
                 only holds trading authority.",
    },
    FaqEntry {
        id: "faq-fees",
        question: "What does it cost?",
        answer: "A single annual advisory fee billed quarterly. There are no performance \
                 fees and no charges on deposits or withdrawals.",
    },
];

/// One expandable question. Items do not coordinate; several may be open.
#[component]
pub fn AccordionItem(
    id: &'static str,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let (state, set_state) = create_signal(ToggleState::collapsed());
    let panel_id = format!("{}-panel", id);

    view! {
        <div class="accordion-item border-b border-slate-700">
            <h3>
                <button
                    id=id
                    class="accordion-trigger w-full flex justify-between py-4 text-left font-medium"
                    aria-controls=panel_id.clone()
                    aria-expanded=move || state.get().aria_expanded()
                    on:click=move |_| set_state.update(|s| *s = s.toggled())
                >
                    {title}
                    <span aria-hidden="true">{move || if state.get().expanded { "−" } else { "+" }}</span>
                </button>
            </h3>
            <div
                id=panel_id
                class="accordion-panel pb-4 text-slate-300"
                role="region"
                aria-labelledby=id
                hidden=move || state.get().panel_hidden()
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="accordion max-w-3xl mx-auto">
            {FAQ
                .iter()
                .map(|entry| {
                    view! {
                        <AccordionItem id=entry.id title=entry.question>
                            <p>{entry.answer}</p>
                        </AccordionItem>
                    }
                })
                .collect_view()}
        </div>
    }
}
