use log::debug;
use yew::prelude::*;

use crate::content::Proposal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Pending,
    History,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 2] = [SidebarTab::Pending, SidebarTab::History];

    pub fn label(self) -> &'static str {
        match self {
            SidebarTab::Pending => "Pending",
            SidebarTab::History => "History",
        }
    }

    pub fn entries(self, pending: &'static [Proposal], history: &'static [Proposal]) -> &'static [Proposal] {
        match self {
            SidebarTab::Pending => pending,
            SidebarTab::History => history,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ExtensionMockupProps {
    pub pending: &'static [Proposal],
    pub history: &'static [Proposal],
}

#[function_component(ExtensionMockup)]
pub fn extension_mockup(props: &ExtensionMockupProps) -> Html {
    let active = use_state_eq(SidebarTab::default);

    let tabs = SidebarTab::ALL.iter().map(|&tab| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("sidebar tab -> {:?}", tab);
                active.set(tab);
            })
        };
        html! {
            <button
                class={classes!("ext-tab", (*active == tab).then_some("active"))}
                onclick={onclick}
            >
                {tab.label()}
                <span class="ext-tab-count">{tab.entries(props.pending, props.history).len().to_string()}</span>
            </button>
        }
    });

    let rows = active.entries(props.pending, props.history).iter().map(|entry| {
        html! {
            <li class="ext-row">
                <div>
                    <div class="ext-vendor">{entry.vendor}</div>
                    <div class={entry.status.class()}>{entry.detail}</div>
                </div>
                <div class="ext-amount">{entry.amount}</div>
            </li>
        }
    });

    html! {
        <div class="browser">
            <div class="browser-bar">
                <div class="mock-dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
                <div class="browser-url">{"qbo.intuit.com/app/expenses"}</div>
            </div>
            <div class="browser-body">
                <div class="browser-page">
                    <div class="skeleton wide"></div>
                    <div class="skeleton"></div>
                    <div class="skeleton"></div>
                    <div class="skeleton short"></div>
                </div>
                <aside class="ext-sidebar">
                    <div class="ext-title">{"ClawBooks"}</div>
                    <div class="ext-tabs">{ for tabs }</div>
                    <ul class="ext-list">{ for rows }</ul>
                </aside>
            </div>
            <style>
                {r#"
                .browser {
                    width: 100%;
                    max-width: 520px;
                    border-radius: 12px;
                    overflow: hidden;
                    background: #12141f;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
                }
                .browser-bar {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.6rem 0.9rem;
                    background: #1b1d29;
                }
                .browser-url {
                    flex: 1;
                    padding: 0.3rem 0.7rem;
                    border-radius: 6px;
                    background: #0b0d14;
                    color: #8b8fa3;
                    font-size: 0.8rem;
                }
                .browser-body { display: flex; min-height: 300px; }
                .browser-page {
                    flex: 1;
                    padding: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .skeleton {
                    height: 12px;
                    width: 70%;
                    border-radius: 6px;
                    background: rgba(255, 255, 255, 0.06);
                }
                .skeleton.wide { width: 90%; height: 18px; }
                .skeleton.short { width: 40%; }
                .ext-sidebar {
                    width: 230px;
                    padding: 0.9rem;
                    background: #171a27;
                    border-left: 1px solid rgba(255, 255, 255, 0.06);
                }
                .ext-title { color: #fff; font-weight: 700; margin-bottom: 0.6rem; }
                .ext-tabs { display: flex; gap: 0.4rem; margin-bottom: 0.6rem; }
                .ext-tab {
                    flex: 1;
                    padding: 0.4rem;
                    border: none;
                    border-radius: 6px;
                    background: transparent;
                    color: #8b8fa3;
                    cursor: pointer;
                    font-size: 0.8rem;
                }
                .ext-tab.active { background: rgba(96, 165, 250, 0.15); color: #60a5fa; }
                .ext-tab-count { margin-left: 0.35rem; opacity: 0.7; }
                .ext-list { list-style: none; margin: 0; padding: 0; }
                .ext-row {
                    display: flex;
                    justify-content: space-between;
                    gap: 0.5rem;
                    padding: 0.55rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    font-size: 0.8rem;
                }
                .ext-vendor { color: #e8e9f0; }
                .ext-detail { color: #8b8fa3; font-size: 0.72rem; }
                .ext-detail.posted { color: #4ade80; }
                .ext-detail.rejected { color: #f87171; }
                .ext-amount { color: #e8e9f0; font-weight: 600; white-space: nowrap; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CLAWBOOKS;

    #[test]
    fn defaults_to_pending() {
        assert_eq!(SidebarTab::default(), SidebarTab::Pending);
    }

    #[test]
    fn each_tab_selects_its_own_list() {
        let pending = SidebarTab::Pending.entries(CLAWBOOKS.pending, CLAWBOOKS.history);
        let history = SidebarTab::History.entries(CLAWBOOKS.pending, CLAWBOOKS.history);
        assert_eq!(pending, CLAWBOOKS.pending);
        assert_eq!(history, CLAWBOOKS.history);
        assert_ne!(pending, history);
    }
}
