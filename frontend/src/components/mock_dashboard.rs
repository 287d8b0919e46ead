use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MockStage {
    #[default]
    Scanning,
    Extracting,
    Ready,
}

impl MockStage {
    pub fn next(self) -> Self {
        match self {
            MockStage::Scanning => MockStage::Extracting,
            MockStage::Extracting => MockStage::Ready,
            MockStage::Ready => MockStage::Scanning,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            MockStage::Scanning => "scanning",
            MockStage::Extracting => "extracting",
            MockStage::Ready => "ready",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MockStage::Scanning => "Scanning inbox…",
            MockStage::Extracting => "AI extracting data…",
            MockStage::Ready => "✓ Ready for approval",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MockCycle {
    pub stage: MockStage,
}

pub struct MockTick;

impl Reducible for MockCycle {
    type Action = MockTick;

    fn reduce(self: Rc<Self>, _: MockTick) -> Rc<Self> {
        Rc::new(MockCycle {
            stage: self.stage.next(),
        })
    }
}

const INVOICE_ROWS: &[(&str, &str, bool)] = &[
    ("From", "Acme Design Co.", false),
    ("Invoice #", "INV-1042", false),
    ("Amount", "$2,450.00", true),
    ("Category", "Web Design Services", false),
];

#[function_component(MockDashboard)]
pub fn mock_dashboard() -> Html {
    let cycle = use_reducer(MockCycle::default);

    {
        let dispatcher = cycle.dispatcher();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(config::MOCK_CYCLE_MS, move || dispatcher.dispatch(MockTick));
            move || drop(interval)
        }, ());
    }

    let stage = cycle.stage;

    html! {
        <div class="mock-dashboard">
            <div class="mock-header">
                <div class="mock-dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
                <span class="mock-title">{"ClawBooks Dashboard"}</span>
            </div>
            <div class="mock-invoice">
                { for INVOICE_ROWS.iter().map(|(label, value, accent)| html! {
                    <div class="mock-invoice-row">
                        <span class="mock-label">{*label}</span>
                        <span class={classes!("mock-value", accent.then_some("accent"))}>{*value}</span>
                    </div>
                }) }
            </div>
            <div class={classes!("mock-status", stage.class())}>
                <div class="mock-pulse"></div>
                <span>{stage.label()}</span>
            </div>
            <div class="mock-actions">
                <button class="mock-approve" tabindex="-1">{"✓ Approve"}</button>
                <button class="mock-reject" tabindex="-1">{"✕ Reject"}</button>
            </div>
            <style>
                {r#"
                .mock-dashboard {
                    background: #12141f;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 16px;
                    padding: 1.25rem;
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
                    max-width: 420px;
                    width: 100%;
                }
                .mock-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .mock-dots { display: flex; gap: 6px; }
                .mock-dots span {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: #3a3d4d;
                }
                .mock-title { color: #8b8fa3; font-size: 0.85rem; }
                .mock-invoice-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.6rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .mock-label { color: #8b8fa3; }
                .mock-value { color: #e8e9f0; font-weight: 500; }
                .mock-value.accent { color: #4ade80; }
                .mock-status {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin: 1rem 0;
                    padding: 0.6rem 0.8rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    transition: background 0.4s ease, color 0.4s ease;
                }
                .mock-status.scanning { background: rgba(96, 165, 250, 0.12); color: #60a5fa; }
                .mock-status.extracting { background: rgba(167, 139, 250, 0.12); color: #a78bfa; }
                .mock-status.ready { background: rgba(74, 222, 128, 0.12); color: #4ade80; }
                .mock-pulse {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: currentColor;
                    animation: mockPulse 1.2s ease-in-out infinite;
                }
                @keyframes mockPulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.3; }
                }
                .mock-actions { display: flex; gap: 0.75rem; }
                .mock-actions button {
                    flex: 1;
                    padding: 0.6rem;
                    border-radius: 8px;
                    border: none;
                    font-weight: 600;
                    cursor: default;
                }
                .mock-approve { background: #4ade80; color: #0b0d14; }
                .mock-reject { background: rgba(248, 113, 113, 0.15); color: #f87171; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(cycle: MockCycle) -> MockCycle {
        *Rc::new(cycle).reduce(MockTick)
    }

    #[test]
    fn starts_scanning() {
        assert_eq!(MockCycle::default().stage, MockStage::Scanning);
    }

    #[test]
    fn six_seconds_visit_every_stage_and_wrap() {
        let ticks = (6000 / config::MOCK_CYCLE_MS) as usize;
        assert_eq!(ticks, 3);

        let mut cycle = MockCycle::default();
        let mut seen = vec![cycle.stage];
        for _ in 0..ticks {
            cycle = tick(cycle);
            seen.push(cycle.stage);
        }
        assert_eq!(
            seen,
            vec![MockStage::Scanning, MockStage::Extracting, MockStage::Ready, MockStage::Scanning]
        );
    }

    #[test]
    fn labels_and_classes_are_fixed() {
        assert_eq!(MockStage::Scanning.label(), "Scanning inbox…");
        assert_eq!(MockStage::Extracting.label(), "AI extracting data…");
        assert_eq!(MockStage::Ready.label(), "✓ Ready for approval");
        assert_eq!(MockStage::Extracting.class(), "extracting");
    }
}
