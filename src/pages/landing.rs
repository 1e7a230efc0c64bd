use yew::prelude::*;

use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::partners::Partners;
use crate::components::pricing::Pricing;
use crate::components::steps::Steps;
use crate::easter_egg::overlay::EasterEgg;
use crate::pages::faq::FaqSection;
use crate::waitlist::form::WaitlistForm;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <Steps />
            <Partners />
            <Features />
            <Pricing />
            <FaqSection />
            <WaitlistForm />
            <footer class="footer">
                <span class="nav-logo">{"SparkCrew"}</span>
                <p>{"© 2026 SparkCrew. Built for people with more ideas than hours."}</p>
            </footer>
            <EasterEgg />
            <style>
                {r#"
                :root {
                    --color-bg: #0a0a0f;
                    --color-surface: rgba(255, 255, 255, 0.04);
                    --color-primary: #00d4ff;
                    --color-accent: #8b5cf6;
                    --color-success: #00ff88;
                    --color-error: #ff3366;
                    --color-text: #ffffff;
                    --color-text-secondary: #a0a0b8;
                    --color-border: rgba(255, 255, 255, 0.08);
                    --radius-lg: 20px;
                    --shadow-glow: 0 0 40px rgba(0, 212, 255, 0.3);
                    --transition-fast: 0.15s;
                    --transition-smooth: 0.3s;
                    --transition-slow: 0.6s;
                }

                body {
                    margin: 0;
                    background: var(--color-bg);
                    color: var(--color-text);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                body.rainbow {
                    animation: rainbow 2s infinite;
                }

                @keyframes rainbow {
                    0% { filter: hue-rotate(0deg); }
                    100% { filter: hue-rotate(360deg); }
                }

                section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .section-header,
                .step,
                .partner-card,
                .feature,
                .pricing-card {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity var(--transition-slow) ease, transform var(--transition-slow) ease;
                }

                .animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-title {
                    font-size: 2.5rem;
                    margin: 0 0 1rem;
                    background: linear-gradient(45deg, #fff, var(--color-primary));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-subtitle {
                    color: var(--color-text-secondary);
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    position: relative;
                }

                .hero-content {
                    flex: 1;
                }

                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border: 1px solid var(--color-border);
                    border-radius: 999px;
                    color: var(--color-primary);
                    font-size: 0.85rem;
                }

                .hero-title {
                    font-size: 3.5rem;
                    line-height: 1.1;
                }

                .gradient-text {
                    background: linear-gradient(135deg, var(--color-primary), var(--color-accent));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    color: var(--color-text-secondary);
                    font-size: 1.2rem;
                    max-width: 520px;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin: 2rem 0;
                }

                .btn-primary,
                .btn-secondary,
                .pricing-cta,
                .nav-cta {
                    padding: 0.8rem 1.6rem;
                    border-radius: 12px;
                    text-decoration: none;
                    color: var(--color-text);
                    transition: all 0.3s ease-out;
                }

                .btn-primary:hover,
                .btn-secondary:hover,
                .pricing-cta:hover,
                .nav-cta:hover {
                    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    transform: translateY(-2px);
                }

                .btn-primary,
                .nav-cta {
                    background: linear-gradient(135deg, var(--color-primary), var(--color-accent));
                }

                .btn-secondary {
                    border: 1px solid var(--color-border);
                }

                .hero-stats {
                    display: flex;
                    gap: 2.5rem;
                }

                .stat-number {
                    display: block;
                    font-size: 2rem;
                    font-weight: 700;
                    color: var(--color-primary);
                }

                .stat-label {
                    color: var(--color-text-secondary);
                    font-size: 0.9rem;
                }

                .hero-visual {
                    flex: 1;
                    position: relative;
                    min-height: 360px;
                }

                .floating-card {
                    position: absolute;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    padding: 1rem 1.4rem;
                    background: var(--color-surface);
                    border: 1px solid var(--color-border);
                    border-radius: 16px;
                    backdrop-filter: blur(10px);
                    transition: transform 2s ease-in-out;
                }

                .floating-card.hovered {
                    transform: translateY(-15px) scale(1.05);
                    z-index: 10;
                    transition: transform var(--transition-smooth) ease;
                }

                .floating-card-1 { top: 10%; left: 5%; }
                .floating-card-2 { top: 45%; right: 0; }
                .floating-card-3 { bottom: 5%; left: 20%; }

                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: var(--color-text-secondary);
                    text-align: center;
                }

                .scroll-indicator {
                    width: 2px;
                    height: 40px;
                    margin: 0 auto 0.5rem;
                    background: linear-gradient(var(--color-primary), transparent);
                }

                .steps,
                .partners-grid,
                .features-grid,
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }

                .step-visual,
                .partner-avatar,
                .feature-icon {
                    transition: transform var(--transition-smooth) ease;
                }

                .step-visual {
                    width: 64px;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: linear-gradient(135deg, var(--color-primary), var(--color-accent));
                    font-weight: 700;
                }

                .pose-scale-105 { transform: scale(1.05); }
                .pose-scale-120 { transform: scale(1.2); }
                .pose-scale-tilt { transform: scale(1.1) rotate(5deg); }

                .partner-card,
                .feature,
                .pricing-card {
                    padding: 2rem;
                    background: var(--color-surface);
                    border: 1px solid var(--color-border);
                    border-radius: var(--radius-lg);
                }

                .partner-avatar {
                    font-size: 2.5rem;
                }

                .partner-role {
                    color: var(--color-text-secondary);
                }

                .partner-skills {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .skill {
                    padding: 0.3rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(0, 212, 255, 0.1);
                    font-size: 0.8rem;
                    opacity: 0;
                    transform: translateY(10px);
                    transition: all var(--transition-smooth) ease;
                }

                .skill.shown {
                    opacity: 1;
                    transform: translateY(0);
                }

                .feature-icon {
                    font-size: 2rem;
                    display: inline-block;
                }

                .pricing-card.featured {
                    border-color: var(--color-primary);
                    box-shadow: var(--shadow-glow);
                }

                .price {
                    display: flex;
                    align-items: baseline;
                    gap: 0.25rem;
                    margin: 1rem 0;
                }

                .price-amount {
                    font-size: 3rem;
                    font-weight: 700;
                }

                .price-period,
                .pricing-perks {
                    color: var(--color-text-secondary);
                }

                .pricing-cta {
                    display: inline-block;
                    border: 1px solid var(--color-primary);
                }

                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    border-bottom: 1px solid var(--color-border);
                }

                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    padding: 1.5rem 0;
                    cursor: pointer;
                    font-size: 1.1rem;
                }

                .faq-answer {
                    overflow: hidden;
                    color: var(--color-text-secondary);
                    transition: max-height var(--transition-smooth) ease;
                }

                .faq-item.active .toggle-icon {
                    color: var(--color-primary);
                }

                .waitlist-form {
                    max-width: 560px;
                    margin: 0 auto;
                    padding: 2rem;
                    border: 2px solid var(--color-border);
                    border-radius: var(--radius-lg);
                    transition: all var(--transition-smooth) ease;
                }

                .waitlist-form.is-success {
                    background: linear-gradient(135deg, rgba(0, 255, 136, 0.1), rgba(0, 212, 255, 0.1));
                    border-color: var(--color-success);
                }

                .form-fields {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .form-fields input {
                    padding: 0.9rem 1rem;
                    border-radius: 12px;
                    border: 1px solid var(--color-border);
                    background: rgba(0, 0, 0, 0.3);
                    color: var(--color-text);
                }

                .form-submit {
                    padding: 0.9rem;
                    border: none;
                    border-radius: 12px;
                    color: var(--color-text);
                    background: linear-gradient(135deg, var(--color-primary), var(--color-accent));
                    cursor: pointer;
                }

                .form-submit.is-busy {
                    opacity: 0.7;
                    cursor: wait;
                }

                .waitlist-form.is-error .form-submit {
                    background: linear-gradient(135deg, var(--color-error), #cc2244);
                }

                .form-result {
                    text-align: center;
                    padding: 2rem;
                }

                .form-result-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    color: var(--color-success);
                }

                .form-result h3 {
                    margin-bottom: 1rem;
                    color: var(--color-success);
                }

                .form-result p {
                    color: var(--color-text-secondary);
                }

                .easter-egg-message {
                    position: fixed;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    background: linear-gradient(135deg, var(--color-primary), var(--color-accent));
                    color: var(--color-bg);
                    padding: 2rem;
                    border-radius: var(--radius-lg);
                    font-size: 1.2rem;
                    font-weight: bold;
                    text-align: center;
                    z-index: 10000;
                    box-shadow: var(--shadow-glow);
                }

                .footer {
                    text-align: center;
                    padding: 3rem 2rem;
                    color: var(--color-text-secondary);
                    border-top: 1px solid var(--color-border);
                }

                @media (max-width: 900px) {
                    .hero {
                        flex-direction: column;
                        padding-top: 8rem;
                    }
                    .hero-title {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
