//! Copy for the landing page. Every section renders from one `PageContent`
//! table so the page can be re-skinned without touching component code.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    /// Subline is rendered as `lead <strong>emphasis</strong> tail`.
    pub subline_lead: &'static str,
    pub subline_emphasis: &'static str,
    pub subline_tail: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub note: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Proposal {
    pub vendor: &'static str,
    pub amount: &'static str,
    pub detail: &'static str,
    pub status: ProposalStatus,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    Pending,
    Posted,
    Rejected,
}

impl ProposalStatus {
    pub fn class(self) -> &'static str {
        match self {
            ProposalStatus::Pending => "ext-detail",
            ProposalStatus::Posted => "ext-detail posted",
            ProposalStatus::Rejected => "ext-detail rejected",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Scope {
    pub does: &'static [&'static str],
    pub does_not: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PageContent {
    pub brand: &'static str,
    pub nav_links: &'static [NavLink],
    pub hero: Hero,
    pub logos: &'static [&'static str],
    pub features: &'static [Feature],
    pub steps: &'static [Step],
    pub telegram_points: &'static [&'static str],
    pub extension_points: &'static [&'static str],
    pub pending: &'static [Proposal],
    pub history: &'static [Proposal],
    pub automations: &'static [Feature],
    pub scope: Scope,
    pub audience: &'static [&'static str],
    pub problems: &'static [&'static str],
    pub footer_tagline: &'static str,
    pub footer_links: &'static [NavLink],
    pub copyright: &'static str,
}

pub const FEATURES_ID: &str = "features";
pub const HOW_IT_WORKS_ID: &str = "how-it-works";
pub const INTERFACES_ID: &str = "interfaces";
pub const AUTOMATIONS_ID: &str = "automations";
pub const SCOPE_ID: &str = "scope";
pub const WHO_ITS_FOR_ID: &str = "who-its-for";
pub const CTA_ID: &str = "cta";

/// Ids of every section the page renders, in page order.
pub const SECTION_IDS: &[&str] = &[
    FEATURES_ID,
    HOW_IT_WORKS_ID,
    INTERFACES_ID,
    AUTOMATIONS_ID,
    SCOPE_ID,
    WHO_ITS_FOR_ID,
    CTA_ID,
];

/// True when a location hash such as `#scope` names a section on the page.
pub fn is_section_anchor(hash: &str) -> bool {
    hash.strip_prefix('#')
        .map_or(false, |id| SECTION_IDS.contains(&id))
}

pub static CLAWBOOKS: PageContent = PageContent {
    brand: "ClawBooks",
    nav_links: &[
        NavLink { label: "Features", anchor: "#features" },
        NavLink { label: "How It Works", anchor: "#how-it-works" },
        NavLink { label: "Interfaces", anchor: "#interfaces" },
        NavLink { label: "Automations", anchor: "#automations" },
        NavLink { label: "Who It's For", anchor: "#who-its-for" },
    ],
    hero: Hero {
        badge: "Powered by OpenClaw AI",
        headline: "Your AI Accountant.",
        headline_accent: "Zero Busywork.",
        subline_lead: "ClawBooks watches your inbox, reads every invoice with AI, and posts to QuickBooks — you just tap ",
        subline_emphasis: "Approve",
        subline_tail: " on Telegram.",
        primary_cta: "Get Early Access →",
        secondary_cta: "See How It Works",
        note: "Pricing coming soon · Join the waitlist for launch access",
    },
    logos: &["QuickBooks", "iCloud Mail", "Gmail", "Telegram", "OpenClaw"],
    features: &[
        Feature {
            icon: "📧",
            title: "Email Monitoring",
            desc: "Watches your inbox 24/7 for invoices, bills, and receipts. iCloud, Gmail, or any IMAP account.",
        },
        Feature {
            icon: "🤖",
            title: "AI Extraction",
            desc: "Reads every invoice and extracts vendor, amount, line items, and due dates automatically.",
        },
        Feature {
            icon: "✅",
            title: "Human Approval",
            desc: "Get a Telegram message before anything posts. Review and approve or reject in seconds. You stay in control.",
        },
        Feature {
            icon: "📊",
            title: "QuickBooks Sync",
            desc: "Approved transactions post directly to your QB account with full audit log and idempotency protection.",
        },
    ],
    steps: &[
        Step {
            number: "01",
            title: "Invoice arrives in your email",
            desc: "ClawBooks monitors your connected inbox and detects new invoices automatically.",
        },
        Step {
            number: "02",
            title: "AI reads and proposes a transaction",
            desc: "Our AI extracts all fields and builds a QuickBooks transaction with confidence scoring.",
        },
        Step {
            number: "03",
            title: "You approve on Telegram in seconds",
            desc: "Tap Approve and it posts instantly. Tap Reject and it's discarded. Full audit trail either way.",
        },
    ],
    telegram_points: &[
        "✓ Instant notification on every new invoice",
        "✓ Full invoice details in the message",
        "✓ One-tap approve or reject",
        "✓ Confirmation when posted to QuickBooks",
    ],
    extension_points: &[
        "✓ Sidebar opens right next to QuickBooks Online",
        "✓ Pending proposals with confidence scores",
        "✓ History of everything that was posted or rejected",
    ],
    pending: &[
        Proposal { vendor: "Acme Design Co.", amount: "$2,450.00", detail: "96% confidence", status: ProposalStatus::Pending },
        Proposal { vendor: "Northwind Hosting", amount: "$189.00", detail: "91% confidence", status: ProposalStatus::Pending },
        Proposal { vendor: "Paper Street Supply", amount: "$72.15", detail: "84% confidence", status: ProposalStatus::Pending },
    ],
    history: &[
        Proposal { vendor: "Globex Legal LLP", amount: "$1,200.00", detail: "Posted", status: ProposalStatus::Posted },
        Proposal { vendor: "Initech Software", amount: "$49.00", detail: "Posted", status: ProposalStatus::Posted },
        Proposal { vendor: "Duplicate: Acme Design Co.", amount: "$2,450.00", detail: "Rejected", status: ProposalStatus::Rejected },
    ],
    automations: &[
        Feature {
            icon: "🔁",
            title: "Recurring Bills",
            desc: "Spots monthly subscriptions and pre-fills the same vendor, category, and account every time.",
        },
        Feature {
            icon: "🧾",
            title: "Receipt Matching",
            desc: "Matches card receipts in your inbox to bank feed transactions already in QuickBooks.",
        },
        Feature {
            icon: "🛡️",
            title: "Duplicate Guard",
            desc: "Flags invoices that look like ones you already approved before they ever reach QuickBooks.",
        },
        Feature {
            icon: "📅",
            title: "Due Date Reminders",
            desc: "A Telegram nudge a few days before an approved bill is due.",
        },
    ],
    scope: Scope {
        does: &[
            "Reads invoices, bills, and receipts from your inbox",
            "Proposes vendor, category, and amount for each one",
            "Posts to QuickBooks only after you approve",
            "Keeps an audit trail of every decision",
        ],
        does_not: &[
            "Move money or pay bills on your behalf",
            "Post anything without your approval",
            "Replace your accountant at tax time",
        ],
    },
    audience: &[
        "Freelancers who dread month-end bookkeeping",
        "Small agencies juggling dozens of vendor invoices",
        "Founders who run their own QuickBooks",
        "Bookkeepers managing several client inboxes",
    ],
    problems: &[
        "Invoices buried in email threads",
        "Hours of copy-paste into QuickBooks",
        "Missed due dates and late fees",
        "No record of who approved what",
    ],
    footer_tagline: "AI accounting for modern teams",
    footer_links: &[
        NavLink { label: "Features", anchor: "#features" },
        NavLink { label: "How It Works", anchor: "#how-it-works" },
        NavLink { label: "Built on OpenClaw", anchor: "https://openclaw.ai" },
    ],
    copyright: "© 2026 ClawBooks. All rights reserved.",
};

/// Inline style that delays an item's fade-in by its position in the list.
pub fn stagger_style(index: usize, step_s: f64) -> String {
    let delay = (index as f64 * step_s * 100.0).round() / 100.0;
    format!("transition-delay: {}s", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_point_at_rendered_sections() {
        for link in CLAWBOOKS.nav_links {
            let id = link.anchor.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&id), "dangling anchor {}", link.anchor);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert!(!SECTION_IDS[i + 1..].contains(id), "duplicate section id {}", id);
        }
    }

    #[test]
    fn recognizes_section_hashes() {
        assert!(is_section_anchor("#automations"));
        assert!(is_section_anchor("#cta"));
        assert!(!is_section_anchor("automations"));
        assert!(!is_section_anchor("#pricing"));
        assert!(!is_section_anchor(""));
    }

    #[test]
    fn subline_keeps_emphasis_inline() {
        let hero = CLAWBOOKS.hero;
        let full = format!("{}{}{}", hero.subline_lead, hero.subline_emphasis, hero.subline_tail);
        assert_eq!(
            full,
            "ClawBooks watches your inbox, reads every invoice with AI, and posts to QuickBooks — you just tap Approve on Telegram."
        );
        assert_eq!(hero.subline_emphasis, "Approve");
    }

    #[test]
    fn status_drives_row_class() {
        assert_eq!(ProposalStatus::Pending.class(), "ext-detail");
        assert_eq!(ProposalStatus::Posted.class(), "ext-detail posted");
        assert_eq!(ProposalStatus::Rejected.class(), "ext-detail rejected");
        assert!(CLAWBOOKS.pending.iter().all(|p| p.status == ProposalStatus::Pending));
        assert!(CLAWBOOKS.history.iter().all(|p| p.status != ProposalStatus::Pending));
    }

    #[test]
    fn in_page_footer_links_resolve() {
        for link in CLAWBOOKS.footer_links.iter().filter(|l| l.anchor.starts_with('#')) {
            assert!(SECTION_IDS.contains(&&link.anchor[1..]));
        }
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_style(0, 0.1), "transition-delay: 0s");
        assert_eq!(stagger_style(2, 0.1), "transition-delay: 0.2s");
        assert_eq!(stagger_style(1, 0.15), "transition-delay: 0.15s");
    }

    #[test]
    fn mock_lists_are_populated() {
        assert_eq!(CLAWBOOKS.steps.len(), 3);
        assert!(!CLAWBOOKS.pending.is_empty());
        assert!(!CLAWBOOKS.history.is_empty());
    }
}
