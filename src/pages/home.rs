use chrono::Datelike;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::header::Header;
use crate::components::loading::LoadingScreen;
use crate::components::scroll_top::ScrollTopButton;
use crate::config::LOADING_SCREEN_MS;
use crate::dom::{apply_theme_class, prefers_dark_scheme};
use crate::sections::{
    about::About, banner::Banner, contact::Contact, projects::Projects,
    recommendations::Recommendations, services::Services, skills::Skills,
};
use crate::state::theme::{LocalStorage, Theme, ThemeController};

#[function_component(Home)]
pub fn home() -> Html {
    let controller = use_mut_ref(|| ThemeController::load(LocalStorage, prefers_dark_scheme()));
    let theme = {
        let controller = controller.clone();
        use_state_eq(move || controller.borrow().theme())
    };
    let loading = use_state_eq(|| true);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |theme: &Theme| {
                apply_theme_class(*theme);
                || ()
            },
            theme,
        );
    }

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOADING_SCREEN_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    let on_toggle_theme = {
        let controller = controller.clone();
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = controller.borrow_mut().toggle();
            theme.set(next);
        })
    };

    let is_dark = theme.is_dark();
    if *loading {
        return html! { <LoadingScreen {is_dark} /> };
    }

    let year = chrono::Local::now().year();

    html! {
        <div class={classes!("page", if is_dark { "dark" } else { "light" })}>
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body { margin: 0; font-family: 'Inter', system-ui, sans-serif; }
                    section { scroll-margin-top: 80px; }
                    .page.dark { background: #000; color: #fff; }
                    .page.light { background: #fff; color: #111827; }
                    .reveal { opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease; }
                    .reveal.revealed { opacity: 1; transform: none; }
                    .section-heading { text-align: center; margin-bottom: 3.5rem; }
                    .section-heading h2 { font-size: clamp(2rem, 4vw, 3rem); margin: 0 0 1rem; }
                    .section-heading p { opacity: 0.75; max-width: 40rem; margin: 0 auto; }
                    .accent { color: #FFAE00; }
                    .footer { text-align: center; padding: 2rem 1rem; font-size: 0.875rem; opacity: 0.7; border-top: 1px solid rgba(107, 114, 128, 0.25); }
                "#}
            </style>
            <Header {is_dark} {on_toggle_theme} />
            <main>
                <Banner {is_dark} />
                <Services {is_dark} />
                <Recommendations {is_dark} />
                <Skills {is_dark} />
                <Projects {is_dark} />
                <About {is_dark} />
                <Contact {is_dark} />
            </main>
            <footer class="footer">
                { format!("© {} João Breno. Todos os direitos reservados.", year) }
            </footer>
            <ScrollTopButton />
        </div>
    }
}
