use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll_spy::use_active_section;
use crate::config::{HEADER_SCROLLED_PX, RESUME_PATH};
use crate::dom::{scroll_to_section, scroll_to_top};
use crate::state::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub is_dark: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { is_dark, on_toggle_theme } = props;
    let menu_open = use_state_eq(|| false);
    let active = use_active_section();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > HEADER_SCROLLED_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let on_logo = {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_top();
            active.set(SectionId::Home);
        })
    };

    let nav_item = |id: SectionId, mobile: bool| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(id);
        });
        html! {
            <button
                key={id.dom_id()}
                class={classes!(
                    if mobile { "mobile-nav-link" } else { "nav-link" },
                    (*active == id).then(|| "active")
                )}
                {onclick}
            >
                { id.label() }
            </button>
        }
    };

    let theme_icon = if *is_dark { "☀" } else { "☾" };

    html! {
        <>
            <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
                <style>
                    {r#"
                        .site-header {
                            position: fixed;
                            top: 0;
                            left: 0;
                            right: 0;
                            z-index: 50;
                            transition: all 0.5s ease;
                            background: transparent;
                        }
                        .site-header.scrolled {
                            background: rgba(255, 255, 255, 0.95);
                            backdrop-filter: blur(12px);
                            border-bottom: 1px solid rgba(229, 231, 235, 0.3);
                            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                        }
                        html.dark .site-header.scrolled {
                            background: rgba(17, 24, 39, 0.95);
                            border-bottom-color: rgba(55, 65, 81, 0.3);
                        }
                        .header-content {
                            max-width: 1280px;
                            margin: 0 auto;
                            padding: 0 1rem;
                            height: 4rem;
                            display: flex;
                            align-items: center;
                            justify-content: space-between;
                        }
                        .logo {
                            font-size: 1.5rem;
                            font-weight: 700;
                            text-decoration: none;
                            color: #111827;
                        }
                        html.dark .logo { color: #ffffff; }
                        .logo .bracket { color: #FFAE00; }
                        .desktop-nav {
                            display: flex;
                            align-items: center;
                            gap: 1.5rem;
                        }
                        .nav-link, .mobile-nav-link {
                            background: none;
                            border: none;
                            cursor: pointer;
                            font-weight: 500;
                            padding: 0.5rem 0.75rem;
                            border-radius: 0.5rem;
                            color: #4b5563;
                            transition: all 0.3s ease;
                        }
                        html.dark .nav-link, html.dark .mobile-nav-link { color: #d1d5db; }
                        .nav-link.active, .mobile-nav-link.active {
                            color: #FFAE00;
                            background: rgba(255, 174, 0, 0.1);
                        }
                        .theme-toggle, .burger {
                            background: #f3f4f6;
                            border: none;
                            border-radius: 0.5rem;
                            padding: 0.5rem 0.7rem;
                            cursor: pointer;
                            font-size: 1.1rem;
                        }
                        html.dark .theme-toggle, html.dark .burger {
                            background: #1f2937;
                            color: #d1d5db;
                        }
                        .resume-button {
                            padding: 0.5rem 1rem;
                            border-radius: 0.5rem;
                            font-weight: 600;
                            color: #000;
                            text-decoration: none;
                            background: linear-gradient(to right, #FFAE00, #f97316);
                        }
                        .mobile-controls { display: none; gap: 0.75rem; }
                        .mobile-nav {
                            display: flex;
                            flex-direction: column;
                            gap: 0.75rem;
                            padding: 1rem;
                            background: rgba(255, 255, 255, 0.95);
                        }
                        html.dark .mobile-nav { background: rgba(17, 24, 39, 0.95); }
                        .mobile-nav-link { text-align: left; padding: 0.75rem 1rem; }
                        .header-spacer { height: 4rem; }
                        @media (max-width: 768px) {
                            .desktop-nav { display: none; }
                            .mobile-controls { display: flex; }
                        }
                    "#}
                </style>
                <div class="header-content">
                    <a href="#home" class="logo" onclick={on_logo}>
                        <span class="bracket">{"<"}</span>
                        {"JB"}
                        <span class="bracket">{"/>"}</span>
                    </a>

                    <nav class="desktop-nav">
                        { for SectionId::NAV.into_iter().map(|id| nav_item(id, false)) }
                        <button class="theme-toggle" onclick={toggle_theme.clone()} aria-label="Alternar tema">
                            { theme_icon }
                        </button>
                        <a class="resume-button" href={RESUME_PATH} download="">
                            {"⬇ CURRÍCULO"}
                        </a>
                    </nav>

                    <div class="mobile-controls">
                        <button class="theme-toggle" onclick={toggle_theme} aria-label="Alternar tema">
                            { theme_icon }
                        </button>
                        <button class="burger" onclick={toggle_menu} aria-label="Menu">
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>

                if *menu_open {
                    <nav class="mobile-nav">
                        { for SectionId::NAV.into_iter().map(|id| nav_item(id, true)) }
                        <a class="resume-button" href={RESUME_PATH} download="">
                            {"⬇ BAIXAR CURRÍCULO"}
                        </a>
                    </nav>
                }
            </header>
            <div class="header-spacer"></div>
        </>
    }
}
