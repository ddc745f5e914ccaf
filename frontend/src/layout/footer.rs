use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::logo::Logo;

const LINK_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("About", ["Our Story", "Mission", "Team", "Careers"]),
    ("Academics", ["Programs", "Admissions", "Calendar", "Resources"]),
    ("Connect", ["Contact Us", "Support", "Campus Map", "News"]),
];

const SOCIALS: [(&str, &str); 5] = [
    ("f", "Facebook"),
    ("𝕏", "Twitter"),
    ("◎", "Instagram"),
    ("▶", "YouTube"),
    ("✉", "Email"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_state(|| Local::now().year());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        margin-top: 5rem;
                        padding: 4rem 0 2rem;
                        background: #101038;
                        overflow: hidden;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                        position: relative;
                        z-index: 10;
                    }
                    .footer-blurb {
                        color: #d1d5db;
                        margin-top: 1rem;
                        max-width: 20rem;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: 1px solid #00F0FF;
                        color: #00F0FF;
                        transition: all 0.3s;
                    }
                    .social-link:hover {
                        background: rgba(0, 240, 255, 0.2);
                        box-shadow: 0 0 10px rgba(0, 240, 255, 0.5);
                        transform: translateY(-3px) scale(1.1);
                    }
                    .footer-column h3 {
                        font-family: "Orbitron", sans-serif;
                        font-size: 1.125rem;
                        color: #00F0FF;
                        margin-bottom: 1rem;
                    }
                    .footer-column li { margin-bottom: 0.5rem; }
                    .footer-column a, .footer-legal a {
                        color: #d1d5db;
                        transition: color 0.3s;
                    }
                    .footer-column a:hover, .footer-legal a:hover { color: #00F0FF; }
                    .footer-bottom {
                        margin-top: 3rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #1f2937;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                    @media (min-width: 640px) {
                        .footer-bottom { flex-direction: row; }
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="cyber-grid-overlay faint"></div>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <Logo />
                        <p class="footer-blurb">
                            {"Pioneering the future of education with cutting-edge technology and innovative teaching methods."}
                        </p>
                        <div class="socials">
                            { for SOCIALS.iter().map(|(glyph, label)| html! {
                                <a href="#" class="social-link" aria-label={*label}>{*glyph}</a>
                            }) }
                        </div>
                    </div>

                    { for LINK_COLUMNS.iter().map(|(title, links)| html! {
                        <div class="footer-column">
                            <h3>{*title}</h3>
                            <ul>
                                { for links.iter().map(|name| html! {
                                    <li><a href="#">{*name}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Cyber Academy. All rights reserved.", *year)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Sitemap"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
