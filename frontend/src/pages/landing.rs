use yew::prelude::*;

use crate::components::cards::{FeatureCard, ProblemCard};
use crate::components::reveal::Reveal;
use crate::components::stat_card::StatCard;

const PROBLEMS: &[(&str, &str, &str)] = &[
    (
        "Students exaggerate their skills",
        "CVs don't tell you if they can actually code. You spend weeks filtering through noise.",
        "red",
    ),
    (
        "You get mismatched candidates",
        "Interviews waste hours on people who aren't a fit for your specific tech stack or culture.",
        "orange",
    ),
    (
        "Assessment is fragmented",
        "No standard way to evaluate intern-level talent across different universities and backgrounds.",
        "yellow",
    ),
];

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "Smart Matching",
        "Our algorithm finds students who actually match your requirements — based on verified test scores, not guesses.",
        "Intelligent Pairing",
    ),
    (
        "Verified Skills",
        "Every student takes coding tests before you see them. No more 'I know Python' — you see their actual level.",
        "Skill Validation",
    ),
    (
        "Progress Tracking",
        "Monitor intern growth in real time. See what they're learning week by week — not just a final report.",
        "Real-time Insights",
    ),
    (
        "Flexible Tiers",
        "Choose your level: High-performance, Development, or Foundational. We match you with students at your pace.",
        "Custom Fit",
    ),
];

const STEPS: &[(&str, &str, &str)] = &[
    ("01", "Sign up for free", "Create your company profile and tell us what kind of interns you need."),
    ("02", "We match you", "Our algorithm pairs you with verified LASU CS students based on real coding assessments."),
    ("03", "Start working together", "Review matched profiles, interview shortlisted candidates, and onboard your new intern."),
];

const BENEFITS: &[&str] = &[
    "Save interview time — see verified skills first",
    "Reduce mismatches — get candidates who actually fit",
    "Build talent pipeline — identify future hires early",
    "Low commitment — start with our free waitlist",
];

const INDUSTRIES: &[(&str, &str)] = &[
    ("⚡", "Fintech"),
    ("💻", "Tech Startups"),
    ("🏦", "Banks"),
    ("🛒", "E-commerce"),
    ("📋", "Consulting"),
    ("⚖️", "Government"),
    ("🏭", "Manufacturing"),
    ("❤️", "Healthcare"),
];

pub const STATS: &[(&str, &str, &str)] = &[
    ("200+", "Students Pre-enrolled", "Verified CS students from LASU ready to work."),
    ("40+", "Companies on Waitlist", "Lagos companies already signed up."),
    ("100%", "Skills Verified", "Every student tested before matching."),
];

const FOOTER_LINKS: &[&str] = &["About", "Features", "For Companies", "Contact"];
const SOCIAL_LINKS: &[&str] = &["Twitter/X", "LinkedIn", "Instagram"];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>

            <header class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <div class="pill intro">
                            <span class="accent">{"🎓"}</span>
                            {" Now accepting companies — Lagos, Nigeria"}
                        </div>
                        <h1 class="intro delay-1">
                            {"The smarter way to find "}<br />
                            <span class="accent serif">{"verified tech interns."}</span>
                        </h1>
                        <p class="hero-subtitle intro delay-2">
                            {"Stop guessing. LASU Internship MatchTrack connects Lagos State University Computer Science students to companies — based on verified skills, not just CVs."}
                        </p>
                        <div class="hero-cta-group intro delay-3">
                            <button class="btn-dark pressable">{"Join the Waitlist →"}</button>
                            <a href="#how-it-works" class="btn-light">{"See How It Works"}</a>
                        </div>
                        <div class="waitlist-note intro delay-4">
                            <span class="accent">{"✦"}</span>{" 40+ companies already on the waitlist"}
                        </div>
                    </div>
                    <div class="hero-visual">
                        <img class="floating" src="/assets/logo-3d.svg" alt="LASU Internship MatchTrack 3D Logo" />
                        <div class="hero-glow"></div>
                    </div>
                </div>
            </header>

            <section id="how-it-works" class="section problem-section">
                <div class="container">
                    <div class="section-head">
                        <div class="pill">{"⚠ THE PROBLEM"}</div>
                        <h2>{"Hiring interns shouldn't feel like a gamble."}</h2>
                        <p>{"Companies waste time and resources on unverified candidates. Here's what they face:"}</p>
                    </div>
                    <div class="grid three">
                        { for PROBLEMS.iter().map(|(title, description, tone)| html! {
                            <ProblemCard title={*title} description={*description} tone={*tone} />
                        }) }
                    </div>
                    <p class="closing-quote">{"\"We're building a better way.\""}</p>
                </div>
            </section>

            <section id="features" class="section dark">
                <div class="container">
                    <div class="section-head">
                        <div class="pill pill-dark">{"⚡ WHAT YOU GET"}</div>
                        <h2>{"Everything you need. "}<br />{"Nothing you don't."}</h2>
                        <p>{"Comprehensive solutions tailored to connect companies with the right intern talent."}</p>
                    </div>
                    <div class="grid two">
                        { for FEATURES.iter().map(|(title, description, badge)| html! {
                            <FeatureCard title={*title} description={*description} badge={*badge} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="section-head">
                        <div class="pill pill-blue">{"🔄 HOW IT WORKS"}</div>
                        <h2>{"Simplify your workflow"}</h2>
                        <p>{"Three simple steps to find your perfect intern match."}</p>
                    </div>
                    <div class="grid three">
                        { for STEPS.iter().map(|(step, title, description)| html! {
                            <div class="step">
                                <div class="step-number">{*step}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="for-companies" class="section tinted">
                <div class="container grid two center">
                    <Reveal class="slide-left">
                        <div class="pill">{"🏢 FOR COMPANIES"}</div>
                        <h2>{"Designed for companies like yours."}</h2>
                        <p class="lead">
                            {"Whether you're a fintech startup or an established bank, we help you find verified interns — fast."}
                        </p>
                        <button class="btn-dark pressable">{"Join the Waitlist"}</button>
                    </Reveal>
                    <Reveal class="slide-right benefits-card">
                        <ul>
                            { for BENEFITS.iter().map(|benefit| html! {
                                <li><span class="star">{"★"}</span><span>{*benefit}</span></li>
                            }) }
                        </ul>
                        <p class="benefits-quote">
                            {"\"Whether you need senior-level interns or are happy to train, we have a tier for you.\""}
                        </p>
                    </Reveal>
                </div>
            </section>

            <section class="section">
                <div class="container centered">
                    <div class="pill pill-pink">{"🎯 WHO IT'S FOR"}</div>
                    <h2>{"Perfect for any Lagos-based company hiring tech talent."}</h2>
                    <p class="lead">{"From startups to enterprises — if you need tech talent in Lagos, we've got you covered."}</p>
                    <div class="industry-tags">
                        { for INDUSTRIES.iter().map(|(icon, label)| html! {
                            <div class="industry-tag">
                                <span>{*icon}</span>
                                <span class="tag-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section stats-section">
                <div class="container">
                    <div class="section-head">
                        <div class="pill pill-green">{"📊 PROOF IN THE NUMBERS"}</div>
                        <h2>{"Built to scale, "}<br />{"proven to perform."}</h2>
                        <p>{"Behind every number is a student matched and a company satisfied."}</p>
                    </div>
                    <div class="grid three">
                        { for STATS.iter().map(|(number, label, description)| html! {
                            <StatCard number={*number} label={*label} description={*description} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="section dark final-cta">
                <div class="cta-glow"></div>
                <div class="container narrow centered">
                    <Reveal>
                        <h2>{"Ready to find your "}<br />{"next great intern?"}</h2>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <p class="lead">
                            {"Be among the first companies to access verified Computer Science talent from LASU. Join free — no commitment needed."}
                        </p>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <button class="btn-white pressable">{"Join the Waitlist — It's Free →"}</button>
                        <p class="fine-print">{"No credit card required. Cancel anytime."}</p>
                    </Reveal>
                </div>
            </section>

            <footer id="contact-us" class="footer">
                <div class="container">
                    <div class="footer-top">
                        <div>
                            <div class="footer-brand">
                                <img src="/assets/logo.svg" alt="Logo" />
                                <span>{"MatchTrack"}</span>
                            </div>
                            <p class="footer-tagline">
                                {"Smarter internships. Verified talent."}<br />
                                {"Connecting the best of LASU to the heart of Lagos tech."}
                            </p>
                        </div>
                        <div class="footer-links">
                            <div>
                                { for FOOTER_LINKS.iter().map(|item| html! { <a href="#">{*item}</a> }) }
                            </div>
                            <div>
                                { for SOCIAL_LINKS.iter().map(|item| html! { <a href="#">{*item}</a> }) }
                            </div>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        {"© 2025 LASU Internship MatchTrack. Built in Lagos, Nigeria."}
                    </div>
                </div>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --dark: #111111;
        --accent: #2563eb;
        --secondary-text: #6b7280;
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: var(--dark);
        background: #fff;
    }
    ::selection { background: var(--accent); color: #fff; }
    a { color: inherit; text-decoration: none; }
    button { font: inherit; cursor: pointer; border: none; }

    .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
    .container.narrow { max-width: 64rem; }
    .centered { text-align: center; }
    .accent { color: var(--accent); }
    .serif { font-family: Georgia, serif; font-style: italic; font-weight: 400; }

    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 50;
        padding: 1.5rem 0;
        background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        padding: 0.75rem 0;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #f3f4f6;
    }
    .nav-content {
        max-width: 80rem; margin: 0 auto; padding: 0 1.5rem;
        display: flex; align-items: center; justify-content: space-between;
    }
    .nav-logo { display: flex; align-items: center; gap: 0.75rem; font-size: 1.25rem; font-weight: 700; }
    .nav-logo img { width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; }
    .nav-links { display: flex; gap: 2rem; }
    .nav-link { font-size: 0.875rem; font-weight: 500; color: var(--secondary-text); transition: color 0.2s; }
    .nav-link:hover { color: var(--dark); }
    .nav-cta { background: var(--dark); color: #fff; padding: 0.625rem 1.5rem; border-radius: 999px; font-size: 0.875rem; font-weight: 700; }
    .burger-menu { display: none; background: none; flex-direction: column; gap: 5px; }
    .burger-menu span { width: 24px; height: 2px; background: var(--dark); transition: transform 0.2s, opacity 0.2s; }
    .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .burger-menu.open span:nth-child(2) { opacity: 0; }
    .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    .mobile-menu {
        display: none; flex-direction: column; gap: 1rem; padding: 0 1.5rem;
        background: #fff; max-height: 0; opacity: 0; overflow: hidden;
        transition: max-height 0.3s ease, opacity 0.3s ease, padding 0.3s ease;
    }
    .mobile-menu.mobile-menu-open { max-height: 24rem; opacity: 1; padding: 1.5rem; border-bottom: 1px solid #f3f4f6; }
    .mobile-link { font-size: 1.125rem; font-weight: 500; }
    .mobile-cta { background: var(--dark); color: #fff; padding: 0.75rem; border-radius: 999px; font-weight: 700; }

    .pressable { transition: transform 0.2s ease; }
    .pressable:hover { transform: scale(1.05); }
    .pressable:active { transform: scale(0.95); }
    .btn-dark { background: var(--dark); color: #fff; padding: 1.25rem 2.5rem; border-radius: 999px; font-weight: 700; font-size: 1.125rem; }
    .btn-light { background: #fff; border: 1px solid #e5e7eb; padding: 1.25rem 2.5rem; border-radius: 999px; font-weight: 700; font-size: 1.125rem; transition: background 0.2s; }
    .btn-light:hover { background: #f9fafb; }
    .btn-white { background: #fff; color: var(--dark); padding: 1.5rem 3rem; border-radius: 999px; font-weight: 700; font-size: 1.5rem; margin-bottom: 2rem; }

    .pill {
        display: inline-flex; align-items: center; gap: 0.5rem;
        padding: 0.375rem 1rem; border-radius: 999px;
        font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase;
        background: #f9fafb; border: 1px solid #f3f4f6; color: var(--secondary-text);
        margin-bottom: 1.5rem;
    }
    .pill-dark { background: rgba(255,255,255,0.05); border-color: transparent; color: rgba(255,255,255,0.4); }
    .pill-blue { background: #eff6ff; border-color: #dbeafe; color: var(--accent); }
    .pill-pink { background: #fdf2f8; border-color: #fce7f3; color: #ec4899; }
    .pill-green { background: #f0fdf4; border-color: #dcfce7; color: #16a34a; }

    .hero { position: relative; padding: 14rem 0 10rem; overflow: hidden; }
    .hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
    .hero h1 { font-size: clamp(3rem, 7vw, 6rem); line-height: 1.05; font-weight: 800; margin: 0 0 2.5rem; }
    .hero .pill { text-transform: none; letter-spacing: 0; font-size: 0.875rem; font-weight: 500; margin-bottom: 2.5rem; }
    .hero-subtitle { font-size: 1.25rem; color: var(--secondary-text); line-height: 1.6; max-width: 36rem; margin-bottom: 3.5rem; }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1.25rem; margin-bottom: 4rem; }
    .waitlist-note { font-size: 0.875rem; font-weight: 500; color: rgba(107,114,128,0.6); }
    .hero-visual { position: relative; display: flex; justify-content: flex-end; }
    .hero-visual img { position: relative; z-index: 1; width: 100%; max-width: 500px; filter: drop-shadow(0 25px 25px rgba(0,0,0,0.15)); }
    .hero-glow {
        position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);
        width: 300px; height: 300px; border-radius: 50%;
        background: rgba(37, 99, 235, 0.1); filter: blur(80px); pointer-events: none;
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-20px); }
    }
    .floating { animation: float 4s ease-in-out infinite; }
    @keyframes rise {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .intro { animation: rise 0.6s ease-out both; }
    .delay-1 { animation-delay: 0.1s; }
    .delay-2 { animation-delay: 0.2s; }
    .delay-3 { animation-delay: 0.3s; }
    .delay-4 { animation-delay: 0.4s; }

    .section { padding: 10rem 0; }
    .section.dark { background: #0a0a0a; color: #fff; }
    .section.tinted { background: #f8fafc; }
    .section h2 { font-size: clamp(2.25rem, 6vw, 5rem); font-weight: 800; margin: 0 0 2rem; line-height: 1.1; }
    .section-head { text-align: center; margin-bottom: 6rem; }
    .section-head p, .lead { font-size: 1.25rem; color: var(--secondary-text); max-width: 42rem; margin: 0 auto 2.5rem; }
    .section.dark .section-head p, .section.dark .lead { color: rgba(255,255,255,0.4); }
    .problem-section { border-top: 1px solid #f9fafb; }
    .closing-quote { text-align: center; font-style: italic; font-size: 1.25rem; color: var(--secondary-text); margin-top: 5rem; }

    .grid { display: grid; gap: 2rem; }
    .grid.two { grid-template-columns: repeat(2, 1fr); }
    .grid.three { grid-template-columns: repeat(3, 1fr); }
    .grid.center { align-items: center; gap: 5rem; }

    .reveal { opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease; }
    .reveal.slide-left { transform: translateX(-30px); }
    .reveal.slide-right { transform: translateX(30px); }
    .reveal.visible { opacity: 1; transform: none; }

    .problem-card, .stat-card {
        background: #fff; border: 1px solid #f3f4f6; border-radius: 1.5rem;
        padding: 2rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05);
    }
    .problem-card h3 { font-size: 1.5rem; margin: 0 0 0.75rem; }
    .problem-card p { color: var(--secondary-text); line-height: 1.6; }
    .problem-icon {
        width: 3rem; height: 3rem; border-radius: 1rem; margin-bottom: 1.5rem;
        display: flex; align-items: center; justify-content: center; font-weight: 700;
    }
    .tone-red { background: #fef2f2; color: #ef4444; }
    .tone-orange { background: #fff7ed; color: #f97316; }
    .tone-yellow { background: #fefce8; color: #eab308; }

    .feature-card {
        background: #151515; border: 1px solid rgba(255,255,255,0.05);
        border-radius: 1.5rem; padding: 2.5rem;
        transition: transform 0.3s ease;
    }
    .feature-card:hover { transform: translateY(-8px); }
    .feature-card h3 { font-size: 1.875rem; margin: 0 0 1rem; }
    .feature-card p { color: rgba(255,255,255,0.5); font-size: 1.125rem; line-height: 1.6; margin-bottom: 1.5rem; }
    .feature-badge { display: flex; align-items: center; gap: 0.5rem; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(255,255,255,0.4); }
    .dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--accent); }

    .step-number { color: var(--accent); font-weight: 700; font-size: 1.25rem; margin-bottom: 1.5rem; }
    .step h3 { font-size: 1.5rem; margin: 0 0 1rem; }
    .step p { color: var(--secondary-text); font-size: 1.125rem; line-height: 1.6; }

    .benefits-card { background: #fff; padding: 3rem; border-radius: 2.5rem; border: 1px solid #f9fafb; box-shadow: 0 20px 25px rgba(30,58,138,0.05); }
    .benefits-card ul { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 2rem; }
    .benefits-card li { display: flex; gap: 1.25rem; font-size: 1.25rem; font-weight: 600; }
    .star { color: var(--accent); }
    .benefits-quote { margin-top: 3rem; padding-top: 2.5rem; border-top: 1px solid #f3f4f6; font-style: italic; font-size: 1.125rem; color: var(--secondary-text); }

    .industry-tags { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
    .industry-tag {
        display: flex; align-items: center; gap: 1rem; cursor: default;
        background: #f9fafb; border: 1px solid #f3f4f6; border-radius: 1.5rem; padding: 1rem 2rem;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .industry-tag:hover { transform: scale(1.05); background: #f8fafc; }
    .tag-label { font-weight: 700; }

    .stats-section { border-top: 1px solid #f9fafb; }
    .stat-card { padding: 2.5rem; }
    .stat-number { font-size: 3.75rem; font-weight: 700; color: var(--accent); margin-bottom: 1rem; font-variant-numeric: tabular-nums; }
    .stat-label { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
    .stat-card p { color: var(--secondary-text); }

    .final-cta { position: relative; overflow: hidden; padding: 14rem 0; }
    .final-cta h2 { font-size: clamp(3rem, 9vw, 8rem); }
    .cta-glow { position: absolute; inset: 0; background: rgba(37,99,235,0.1); filter: blur(150px); pointer-events: none; }
    .fine-print { color: rgba(255,255,255,0.2); font-size: 0.875rem; font-weight: 500; }

    .footer { background: #0a0a0a; border-top: 1px solid rgba(255,255,255,0.05); padding: 8rem 0 4rem; color: #fff; }
    .footer-top { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 3rem; margin-bottom: 6rem; }
    .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 2rem; font-size: 1.5rem; font-weight: 700; }
    .footer-brand img { width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; }
    .footer-tagline { color: rgba(255,255,255,0.3); font-size: 1.125rem; max-width: 28rem; line-height: 1.6; }
    .footer-links { display: flex; flex-wrap: wrap; gap: 5rem; }
    .footer-links div { display: flex; gap: 3rem; }
    .footer-links a { color: rgba(255,255,255,0.4); font-weight: 500; transition: color 0.2s; }
    .footer-links a:hover { color: #fff; }
    .footer-bottom { padding-top: 4rem; border-top: 1px solid rgba(255,255,255,0.05); text-align: center; color: rgba(255,255,255,0.1); font-size: 0.875rem; }

    @media (max-width: 768px) {
        .nav-links, .nav-cta { display: none; }
        .burger-menu { display: flex; }
        .mobile-menu { display: flex; }
        .hero { padding: 8rem 0 6rem; }
        .hero-grid, .grid.two, .grid.three { grid-template-columns: 1fr; }
        .hero-visual { justify-content: center; }
        .section { padding: 6rem 0; }
    }
"#;
