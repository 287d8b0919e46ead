use yew::prelude::*;

use crate::components::extension_mockup::ExtensionMockup;
use crate::components::mock_dashboard::MockDashboard;
use crate::components::nav::Nav;
use crate::components::telegram_mockup::TelegramMockup;
use crate::components::waitlist::WaitlistForm;
use crate::config;
use crate::content::{
    is_section_anchor, stagger_style, PageContent, AUTOMATIONS_ID, CTA_ID, FEATURES_ID, HOW_IT_WORKS_ID,
    INTERFACES_ID, SCOPE_ID, WHO_ITS_FOR_ID,
};
use crate::hooks::reveal::{fade_class, use_in_view};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: &'static PageContent,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let hero = &props.content.hero;
    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-inner">
                <div class="hero-text">
                    <div class="hero-badge">{hero.badge}</div>
                    <h1 class="hero-headline">
                        {hero.headline}
                        <br />
                        <span class="gradient-text">{hero.headline_accent}</span>
                    </h1>
                    <p class="hero-sub">
                        {hero.subline_lead}
                        <strong>{hero.subline_emphasis}</strong>
                        {hero.subline_tail}
                    </p>
                    <div class="hero-actions">
                        <a href={format!("#{}", CTA_ID)} class="btn-primary btn-lg">{hero.primary_cta}</a>
                        <a href={format!("#{}", HOW_IT_WORKS_ID)} class="btn-ghost btn-lg">{hero.secondary_cta}</a>
                    </div>
                    <p class="hero-note">{hero.note}</p>
                </div>
                <div class="hero-visual">
                    <MockDashboard />
                </div>
            </div>
        </section>
    }
}

#[function_component(LogoBar)]
fn logo_bar(props: &SectionProps) -> Html {
    html! {
        <div class="logo-bar">
            <span class="logo-bar-label">{"Works with"}</span>
            <div class="logo-bar-items">
                { for props.content.logos.iter().map(|name| html! {
                    <span key={*name} class="logo-pill">{*name}</span>
                }) }
            </div>
        </div>
    }
}

#[function_component(Features)]
fn features(props: &SectionProps) -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    html! {
        <section class="section" id={FEATURES_ID} ref={node}>
            <div class="container">
                <div class={classes!("section-header", fade_class(visible))}>
                    <div class="section-tag">{"Features"}</div>
                    <h2>{"Everything your accountant does, automated"}</h2>
                    <p class="section-sub">{"From inbox to QuickBooks in seconds, with you approving every step."}</p>
                </div>
                <div class="features-grid">
                    { for props.content.features.iter().enumerate().map(|(i, feature)| html! {
                        <div
                            key={feature.title}
                            class={classes!("feature-card", fade_class(visible))}
                            style={stagger_style(i, config::CARD_STAGGER_S)}
                        >
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works(props: &SectionProps) -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    let steps = props.content.steps;
    html! {
        <section class="section section-dark" id={HOW_IT_WORKS_ID} ref={node}>
            <div class="container">
                <div class={classes!("section-header", fade_class(visible))}>
                    <div class="section-tag">{"How It Works"}</div>
                    <h2>{"Three steps. That's it."}</h2>
                </div>
                <div class="steps">
                    { for steps.iter().enumerate().map(|(i, step)| html! {
                        <div
                            key={step.number}
                            class={classes!("step", fade_class(visible))}
                            style={stagger_style(i, config::STEP_STAGGER_S)}
                        >
                            <div class="step-num">{step.number}</div>
                            <div class="step-content">
                                <h3>{step.title}</h3>
                                <p>{step.desc}</p>
                            </div>
                            {
                                if i + 1 < steps.len() {
                                    html! { <div class="step-connector"></div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Interfaces)]
fn interfaces(props: &SectionProps) -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    let content = props.content;
    html! {
        <section class="section" id={INTERFACES_ID} ref={node}>
            <div class="container mockup-section">
                <div class={classes!("mockup-text", fade_class(visible))}>
                    <div class="section-tag">{"Approval Flow"}</div>
                    <h2>{"Approve invoices right from Telegram"}</h2>
                    <p>{"No dashboards to log into. No emails to reply to. Just a tap, and it's done."}</p>
                    <ul class="mockup-list">
                        { for content.telegram_points.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </div>
                <div class={classes!("phone-wrap", fade_class(visible))} style="transition-delay: 0.2s">
                    <TelegramMockup />
                </div>
            </div>
            <div class="container mockup-section reverse">
                <div class={classes!("mockup-text", fade_class(visible))} style="transition-delay: 0.3s">
                    <div class="section-tag">{"Browser Extension"}</div>
                    <h2>{"Or review everything inside QuickBooks"}</h2>
                    <p>{"Prefer a bigger screen? The ClawBooks sidebar sits next to your books."}</p>
                    <ul class="mockup-list">
                        { for content.extension_points.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </div>
                <div class={classes!("browser-wrap", fade_class(visible))} style="transition-delay: 0.4s">
                    <ExtensionMockup pending={content.pending} history={content.history} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Automations)]
fn automations(props: &SectionProps) -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    html! {
        <section class="section section-dark" id={AUTOMATIONS_ID} ref={node}>
            <div class="container">
                <div class={classes!("section-header", fade_class(visible))}>
                    <div class="section-tag">{"Automations"}</div>
                    <h2>{"The boring parts, handled"}</h2>
                </div>
                <div class="features-grid">
                    { for props.content.automations.iter().enumerate().map(|(i, item)| html! {
                        <div
                            key={item.title}
                            class={classes!("feature-card", fade_class(visible))}
                            style={stagger_style(i, config::CARD_STAGGER_S)}
                        >
                            <div class="feature-icon">{item.icon}</div>
                            <h3>{item.title}</h3>
                            <p>{item.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ScopeSection)]
fn scope_section(props: &SectionProps) -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    let scope = &props.content.scope;
    html! {
        <section class="section" id={SCOPE_ID} ref={node}>
            <div class="container">
                <div class={classes!("section-header", fade_class(visible))}>
                    <div class="section-tag">{"Scope"}</div>
                    <h2>{"What ClawBooks does, and what it doesn't"}</h2>
                </div>
                <div class="scope-grid">
                    <div class={classes!("scope-card", "does", fade_class(visible))}>
                        <h3>{"Does"}</h3>
                        <ul>{ for scope.does.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                    </div>
                    <div class={classes!("scope-card", "does-not", fade_class(visible))} style={stagger_style(1, config::CARD_STAGGER_S)}>
                        <h3>{"Doesn't"}</h3>
                        <ul>{ for scope.does_not.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(WhoItsFor)]
fn who_its_for(props: &SectionProps) -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    let content = props.content;
    html! {
        <section class="section section-dark" id={WHO_ITS_FOR_ID} ref={node}>
            <div class="container">
                <div class={classes!("section-header", fade_class(visible))}>
                    <div class="section-tag">{"Who It's For"}</div>
                    <h2>{"Built for people who'd rather not do bookkeeping"}</h2>
                </div>
                <div class="scope-grid">
                    <div class={classes!("scope-card", fade_class(visible))}>
                        <h3>{"You'll love it if you're"}</h3>
                        <ul>{ for content.audience.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                    </div>
                    <div class={classes!("scope-card", fade_class(visible))} style={stagger_style(1, config::CARD_STAGGER_S)}>
                        <h3>{"Tired of"}</h3>
                        <ul>{ for content.problems.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Cta)]
fn cta() -> Html {
    let (node, visible) = use_in_view(config::REVEAL_THRESHOLD);
    html! {
        <section class="section cta-section" id={CTA_ID} ref={node}>
            <div class="cta-glow"></div>
            <div class={classes!("container", "cta-inner", fade_class(visible))}>
                <h2>{"Start automating your books today"}</h2>
                <p>{"Join the waitlist. Be first when we launch."}</p>
                <WaitlistForm />
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let content = props.content;
    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-logo">
                    <img class="logo-image logo-image-footer" src={config::logo_src()} alt={content.brand} />
                    <span class="footer-tagline">{content.footer_tagline}</span>
                </div>
                <div class="footer-links">
                    { for content.footer_links.iter().map(|link| html! {
                        <a href={link.anchor}>{link.label}</a>
                    }) }
                </div>
                <div class="footer-copy">{content.copyright}</div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing(props: &SectionProps) -> Html {
    let content = props.content;

    // Scroll to top on initial mount unless the URL targets a section
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let hash = window.location().hash().unwrap_or_default();
                    if !is_section_anchor(&hash) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Nav brand={content.brand} links={content.nav_links} />
            <Hero content={content} />
            <LogoBar content={content} />
            <Features content={content} />
            <HowItWorks content={content} />
            <Interfaces content={content} />
            <Automations content={content} />
            <ScopeSection content={content} />
            <WhoItsFor content={content} />
            <Cta />
            <Footer content={content} />
            <style>
                {r#"
                * { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    background: #0b0d14;
                    color: #e8e9f0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    line-height: 1.6;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section { position: relative; padding: 6rem 0; scroll-margin-top: 4rem; }
                .section-dark { background: #0f111a; }
                .section-header { text-align: center; max-width: 720px; margin: 0 auto 3.5rem; }
                .section-header h2, .mockup-text h2, .cta-inner h2 {
                    font-size: clamp(1.8rem, 3.5vw, 2.6rem);
                    line-height: 1.2;
                    margin: 0.5rem 0 1rem;
                }
                .section-tag {
                    display: inline-block;
                    padding: 0.25rem 0.8rem;
                    border-radius: 999px;
                    background: rgba(96, 165, 250, 0.12);
                    color: #60a5fa;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.04em;
                    text-transform: uppercase;
                }
                .section-sub { color: #8b8fa3; font-size: 1.1rem; }
                .fade-in {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.visible { opacity: 1; transform: none; }
                .btn-primary, .btn-ghost {
                    display: inline-block;
                    padding: 0.7rem 1.4rem;
                    border-radius: 10px;
                    font-weight: 600;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.95rem;
                }
                .btn-primary { background: linear-gradient(135deg, #60a5fa, #a78bfa); color: #0b0d14; }
                .btn-ghost { border: 1px solid rgba(255, 255, 255, 0.15); color: #e8e9f0; }
                .btn-lg { padding: 0.95rem 1.8rem; font-size: 1.05rem; }
                .hero { position: relative; padding: 10rem 0 6rem; overflow: hidden; }
                .hero-glow, .cta-glow {
                    position: absolute;
                    width: 600px;
                    height: 600px;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(96, 165, 250, 0.18), transparent 70%);
                    pointer-events: none;
                }
                .hero-glow { top: -200px; right: -100px; }
                .cta-glow { left: 50%; top: 50%; transform: translate(-50%, -50%); }
                .hero-inner {
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.3rem 0.9rem;
                    border: 1px solid rgba(167, 139, 250, 0.4);
                    border-radius: 999px;
                    color: #a78bfa;
                    font-size: 0.85rem;
                }
                .hero-headline { font-size: clamp(2.4rem, 5vw, 3.8rem); line-height: 1.1; margin: 1.2rem 0; }
                .gradient-text {
                    background: linear-gradient(135deg, #60a5fa, #a78bfa);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-sub { color: #a3a7ba; font-size: 1.15rem; max-width: 540px; }
                .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin: 2rem 0 1rem; }
                .hero-note { color: #6b6f82; font-size: 0.9rem; }
                .hero-visual { display: flex; justify-content: center; }
                .logo-bar {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                    padding: 2rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .logo-bar-label { color: #6b6f82; font-size: 0.85rem; }
                .logo-bar-items { display: flex; gap: 0.75rem; flex-wrap: wrap; }
                .logo-pill {
                    padding: 0.35rem 0.9rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #c9cbd6;
                    font-size: 0.85rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card, .scope-card {
                    padding: 1.75rem;
                    border-radius: 14px;
                    background: #12141f;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                }
                .feature-icon { font-size: 1.8rem; margin-bottom: 0.8rem; }
                .feature-card h3 { margin: 0 0 0.5rem; }
                .feature-card p { color: #8b8fa3; margin: 0; }
                .steps { max-width: 760px; margin: 0 auto; }
                .step { position: relative; display: flex; gap: 1.5rem; padding-bottom: 2.5rem; }
                .step-num {
                    flex-shrink: 0;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(96, 165, 250, 0.12);
                    color: #60a5fa;
                    font-weight: 700;
                }
                .step-content h3 { margin: 0.4rem 0; }
                .step-content p { color: #8b8fa3; margin: 0; }
                .step-connector {
                    position: absolute;
                    left: 27px;
                    top: 60px;
                    bottom: 4px;
                    width: 2px;
                    background: linear-gradient(#60a5fa55, transparent);
                }
                .mockup-section {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .mockup-section + .mockup-section { margin-top: 6rem; }
                .mockup-section.reverse .mockup-text { order: 2; }
                .mockup-text p { color: #a3a7ba; }
                .mockup-list { list-style: none; padding: 0; color: #c9cbd6; }
                .mockup-list li { padding: 0.35rem 0; }
                .phone-wrap, .browser-wrap { display: flex; justify-content: center; }
                .scope-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    max-width: 900px;
                    margin: 0 auto;
                }
                .scope-card h3 { margin-top: 0; }
                .scope-card ul { padding-left: 1.1rem; color: #a3a7ba; }
                .scope-card.does h3 { color: #4ade80; }
                .scope-card.does-not h3 { color: #f87171; }
                .cta-section { text-align: center; overflow: hidden; }
                .cta-inner { position: relative; max-width: 640px; }
                .cta-inner p { color: #a3a7ba; }
                .cta-form { display: flex; gap: 0.75rem; margin-top: 2rem; flex-wrap: wrap; justify-content: center; }
                .cta-form input {
                    flex: 1;
                    min-width: 240px;
                    padding: 0.8rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: #12141f;
                    color: #e8e9f0;
                    font-size: 1rem;
                }
                .cta-thanks {
                    margin-top: 2rem;
                    padding: 1rem;
                    border-radius: 10px;
                    background: rgba(74, 222, 128, 0.12);
                    color: #4ade80;
                    font-weight: 600;
                }
                .footer { padding: 3rem 0; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                .footer-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                .footer-logo { display: flex; align-items: center; gap: 1rem; }
                .logo-image-footer { height: 28px; width: auto; }
                .footer-tagline, .footer-copy { color: #6b6f82; font-size: 0.9rem; }
                .footer-links { display: flex; gap: 1.5rem; }
                .footer-links a { color: #a3a7ba; text-decoration: none; }
                @media (max-width: 860px) {
                    .hero { padding-top: 7rem; }
                    .hero-inner, .mockup-section { grid-template-columns: 1fr; }
                    .mockup-section.reverse .mockup-text { order: 0; }
                    .ext-sidebar { width: 100%; border-left: none; }
                    .browser-page { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
