use yew::prelude::*;

use crate::config;

/// Outcome of the demo approval buttons. The first click is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApprovalChoice {
    #[default]
    Unset,
    Approved,
    Rejected,
}

impl ApprovalChoice {
    pub fn choose(self, next: ApprovalChoice) -> Self {
        match self {
            ApprovalChoice::Unset => next,
            decided => decided,
        }
    }

    pub fn confirmation(self) -> Option<(&'static str, &'static str)> {
        match self {
            ApprovalChoice::Unset => None,
            ApprovalChoice::Approved => Some(("tg-confirmed", "✅ Posted to QuickBooks!")),
            ApprovalChoice::Rejected => Some(("tg-rejected", "❌ Invoice rejected")),
        }
    }
}

const MESSAGE_ROWS: &[(&str, &str, bool)] = &[
    ("From", "Acme Design Co.", false),
    ("Amount", "$2,450.00", true),
    ("Category", "Web Design", false),
    ("Due", "Mar 1, 2026", false),
];

#[function_component(TelegramMockup)]
pub fn telegram_mockup() -> Html {
    let choice = use_state_eq(ApprovalChoice::default);

    let choose = |next: ApprovalChoice| {
        let choice = choice.clone();
        Callback::from(move |_: MouseEvent| choice.set((*choice).choose(next)))
    };

    let footer = match choice.confirmation() {
        Some((class, text)) => html! { <div class={class}>{text}</div> },
        None => html! {
            <div class="tg-btns">
                <button class="tg-approve" onclick={choose(ApprovalChoice::Approved)}>{"✓ Approve"}</button>
                <button class="tg-reject" onclick={choose(ApprovalChoice::Rejected)}>{"✕ Reject"}</button>
            </div>
        },
    };

    html! {
        <div class="phone">
            <div class="phone-notch"></div>
            <div class="phone-screen">
                <div class="tg-header">
                    <div class="tg-avatar">
                        <img src={config::mark_src()} alt="ClawBooks logo mark" />
                    </div>
                    <div>
                        <div class="tg-name">{"ClawBooks"}</div>
                        <div class="tg-status">{"bot"}</div>
                    </div>
                </div>
                <div class="tg-messages">
                    <div class="tg-msg">
                        <div class="tg-msg-title">{"📄 New Invoice Detected"}</div>
                        { for MESSAGE_ROWS.iter().map(|(label, value, accent)| html! {
                            <div class="tg-msg-row">
                                <span>{*label}</span>
                                <strong class={classes!(accent.then_some("accent"))}>{*value}</strong>
                            </div>
                        }) }
                        { footer }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .phone {
                    position: relative;
                    width: 300px;
                    border-radius: 36px;
                    padding: 14px;
                    background: #1b1d29;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 30px 70px rgba(0, 0, 0, 0.5);
                }
                .phone-notch {
                    width: 110px;
                    height: 22px;
                    margin: 0 auto 10px;
                    border-radius: 0 0 14px 14px;
                    background: #0b0d14;
                }
                .phone-screen {
                    border-radius: 24px;
                    overflow: hidden;
                    background: #0e1621;
                    min-height: 440px;
                }
                .tg-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1rem;
                    background: #17212b;
                }
                .tg-avatar img {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                }
                .tg-name { color: #fff; font-weight: 600; }
                .tg-status { color: #6c7883; font-size: 0.8rem; }
                .tg-messages { padding: 1rem; }
                .tg-msg {
                    background: #182533;
                    border-radius: 12px;
                    padding: 0.9rem;
                    color: #e8e9f0;
                    font-size: 0.9rem;
                }
                .tg-msg-title { font-weight: 600; margin-bottom: 0.6rem; }
                .tg-msg-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.25rem 0;
                    color: #8b98a5;
                }
                .tg-msg-row strong { color: #e8e9f0; }
                .tg-msg-row strong.accent { color: #4ade80; }
                .tg-btns { display: flex; gap: 0.5rem; margin-top: 0.8rem; }
                .tg-btns button {
                    flex: 1;
                    padding: 0.55rem;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .tg-approve { background: #2b5278; color: #fff; }
                .tg-reject { background: #2b2f3a; color: #f87171; }
                .tg-confirmed, .tg-rejected {
                    margin-top: 0.8rem;
                    padding: 0.55rem;
                    border-radius: 8px;
                    text-align: center;
                    font-weight: 600;
                }
                .tg-confirmed { background: rgba(74, 222, 128, 0.12); color: #4ade80; }
                .tg-rejected { background: rgba(248, 113, 113, 0.12); color: #f87171; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_shows_no_confirmation() {
        assert_eq!(ApprovalChoice::default(), ApprovalChoice::Unset);
        assert!(ApprovalChoice::Unset.confirmation().is_none());
    }

    #[test]
    fn first_choice_sticks() {
        let approved = ApprovalChoice::Unset.choose(ApprovalChoice::Approved);
        assert_eq!(approved, ApprovalChoice::Approved);
        assert_eq!(approved.choose(ApprovalChoice::Rejected), ApprovalChoice::Approved);

        let rejected = ApprovalChoice::Unset.choose(ApprovalChoice::Rejected);
        assert_eq!(rejected.choose(ApprovalChoice::Approved), ApprovalChoice::Rejected);
    }

    #[test]
    fn confirmation_text_matches_choice() {
        assert_eq!(
            ApprovalChoice::Approved.confirmation(),
            Some(("tg-confirmed", "✅ Posted to QuickBooks!"))
        );
        assert_eq!(
            ApprovalChoice::Rejected.confirmation(),
            Some(("tg-rejected", "❌ Invoice rejected"))
        );
    }
}
