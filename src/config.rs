
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Mail endpoint served locally during development
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub fn send_email_url() -> String {
    format!("{}/api/send-email", get_backend_url())
}

/// Height of the fixed header, added to `scrollY` when deciding the active section.
pub const HEADER_OFFSET_PX: f64 = 100.0;
/// Header switches to its solid backdrop past this scroll offset.
pub const HEADER_SCROLLED_PX: f64 = 50.0;
pub const SCROLL_TOP_VISIBLE_PX: f64 = 500.0;

pub const AUTOPLAY_INTERVAL_MS: u32 = 6_000;
pub const SLIDE_TRANSITION_MS: u32 = 300;
pub const SWIPE_THRESHOLD_PX: i32 = 50;

pub const MODAL_EXIT_MS: u32 = 300;
/// Delay between closing a service dialog and scrolling to the contact form.
pub const CONTACT_SCROLL_DELAY_MS: u32 = 100;

pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const LOADING_SCREEN_MS: u32 = 2_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.2;

pub const SKILLS_COLLAPSED_COUNT: usize = 8;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const RESUME_PATH: &str = "/curriculo-joao-breno.pdf";
