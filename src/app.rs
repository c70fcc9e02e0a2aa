use chrono::Datelike;
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{
    Faq, HeroChart, MarketPlaybookPanel, NavBar, Reveal, RoiForm, SimulationForm,
    StatisticsCharts,
};
use crate::config::SiteConfig;

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Regime detection",
        body: "Machine-learning classifiers read breadth, volatility and credit signals to \
               label each session as expansion, correction, volatile or recession.",
    },
    Feature {
        title: "Adaptive allocation",
        body: "Factor tilts and cash buffers follow the detected regime instead of a fixed \
               calendar rebalance.",
    },
    Feature {
        title: "Drawdown guardrails",
        body: "Hedges scale in before losses reach your limit, keeping recovery paths short.",
    },
];

#[component]
fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="max-w-7xl mx-auto px-4 py-16">
            <Reveal>
                <h2 class="text-3xl font-bold mb-3">{title}</h2>
                {lead.map(|text| view! { <p class="text-slate-300 mb-8 max-w-2xl">{text}</p> })}
            </Reveal>
            {children()}
        </section>
    }
}

#[component]
pub fn App(#[prop(optional)] config: Option<SiteConfig>) -> impl IntoView {
    provide_meta_context();
    provide_context(config.unwrap_or_default());

    let year = chrono::Local::now().year();

    view! {
        <Title text="CAPPY | Adaptive Portfolio Intelligence"/>
        <Meta
            name="description"
            content="Regime-aware portfolio management with transparent, hypothetical projections."
        />
        <div id="top" class="min-h-screen bg-slate-950 text-slate-100">
            <NavBar/>

            <main>
                <section class="hero relative max-w-7xl mx-auto px-4 pt-16 pb-8 grid gap-8 lg:grid-cols-2 items-center">
                    <Reveal>
                        <h1 class="text-4xl lg:text-5xl font-bold mb-4">
                            "Portfolios that adapt to the market you are in"
                        </h1>
                        <p class="text-slate-300 mb-6">
                            "CAPPY reads market regimes in real time and reshapes risk before it reaches you."
                        </p>
                        <a href="#simulator" class="inline-block bg-teal-500 text-slate-950 px-6 py-3 rounded-lg font-medium">
                            "Try the simulator"
                        </a>
                    </Reveal>
                    <div class="rounded-xl overflow-hidden bg-slate-900">
                        <HeroChart/>
                    </div>
                </section>

                <Section id="platform" title="The platform">
                    <div class="grid gap-6 md:grid-cols-3">
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <Reveal class="rounded-xl bg-slate-900 p-6">
                                        <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                                        <p class="text-slate-300">{feature.body}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section
                    id="performance"
                    title="Performance"
                    lead="Backtested results. Past performance does not guarantee future results."
                >
                    <StatisticsCharts/>
                </Section>

                <Section
                    id="simulator"
                    title="Simulator"
                    lead="Explore hypothetical outcomes for your capital and time horizon."
                >
                    <div class="grid gap-10 lg:grid-cols-2">
                        <Reveal>
                            <h3 class="text-xl font-semibold mb-4">"Portfolio simulation"</h3>
                            <SimulationForm/>
                        </Reveal>
                        <Reveal>
                            <h3 class="text-xl font-semibold mb-4">"Return comparison"</h3>
                            <RoiForm/>
                        </Reveal>
                    </div>
                </Section>

                <Section
                    id="playbooks"
                    title="Market playbooks"
                    lead="See how the strategy responds to each market regime."
                >
                    <Reveal>
                        <MarketPlaybookPanel/>
                    </Reveal>
                </Section>

                <Section id="faq" title="Frequently asked questions">
                    <Faq/>
                </Section>
            </main>

            <footer class="border-t border-slate-800 py-8 text-center text-sm text-slate-400">
                "© " <span id="year">{year}</span> " CAPPY Capital. All rights reserved."
            </footer>
        </div>
    }
}
