use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

// Lounge contact details
pub const WHATSAPP_NUMBER: &str = "917010519965";
pub const PHONE_DISPLAY: &str = "+91 70105 19965";
pub const PHONE_HREF: &str = "tel:+917010519965";
pub const STORE_ADDRESS: &str = "34, Siluvathur Rd, Elli Nagar, Dindigul";
pub const STORE_HOURS: &str = "10:30 AM – 9:30 PM Daily";

pub const INSTAGRAM_HANDLE: &str = "@gamerscreed_dgl";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/gamerscreed_dgl/";
pub const MAPS_SEARCH_URL: &str = "https://maps.google.com/?q=Gamers+Creed+Dindigul";
pub const MAPS_PLACE_URL: &str = "https://www.google.com/maps/place/GAMERS+CREED/";
pub const GOOGLE_IMAGES_URL: &str = "https://www.google.com/search?q=Gamers+Creed+Dindigul&tbm=isch";

pub const PORTFOLIO_EMAIL: &str = "mailto:hello@example.com";

// Timers, in milliseconds
pub const LOADING_SCREEN_MS: u32 = 2_500;
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const ACHIEVEMENT_POPUP_MS: u32 = 3_000;
pub const BOSS_DEFEAT_MS: u32 = 2_000;
