use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::cyber_button::{ButtonSize, ButtonVariant, CyberButton};
use crate::config;
use crate::hooks::{use_reveal, use_simulated_submit, SubmitPhase};

const PLATFORMS: &[(&str, &str)] = &[
    ("ps5", "PS5"),
    ("pc", "PC Gaming"),
    ("vr", "VR (PSVR2)"),
    ("sim", "Racing Simulator"),
    ("lounge", "Dolby Atmos Lounge"),
];

const PARTY_SIZES: &[(&str, &str)] = &[
    ("1", "Solo"),
    ("2", "Duo"),
    ("3-4", "Squad (3-4)"),
    ("5+", "Party (5+)"),
];

const TIME_SLOTS: &[(&str, &str)] = &[
    ("10:30", "10:30 AM"),
    ("12:00", "12:00 PM"),
    ("14:00", "2:00 PM"),
    ("16:00", "4:00 PM"),
    ("18:00", "6:00 PM"),
    ("20:00", "8:00 PM"),
];

/// A store info card; cards without a link render as plain panels.
struct StoreInfo {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: Option<&'static str>,
}

const STORE_INFO: &[StoreInfo] = &[
    StoreInfo {
        icon: "📍",
        label: "LOCATION",
        value: config::STORE_ADDRESS,
        href: Some(config::MAPS_SEARCH_URL),
    },
    StoreInfo {
        icon: "📞",
        label: "CALL US",
        value: config::PHONE_DISPLAY,
        href: Some(config::PHONE_HREF),
    },
    StoreInfo {
        icon: "⏰",
        label: "HOURS",
        value: config::STORE_HOURS,
        href: None,
    },
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub platform: String,
    pub players: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingForm {
    /// Plain-text booking request sent through WhatsApp.
    pub fn whatsapp_message(&self) -> String {
        let note = if self.message.is_empty() {
            String::new()
        } else {
            format!("Note: {}", self.message)
        };
        format!(
            "Hi Gamer's Creed! I'd like to book a session.\nName: {}\nPlatform: {}\nPlayers: {}\nDate: {}\nTime: {}\n{}",
            self.name, self.platform, self.players, self.date, self.time, note
        )
    }

    pub fn whatsapp_link(&self, number: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&self.whatsapp_message())
        )
    }
}

#[function_component(BookingSection)]
pub fn booking_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");

    let form = use_state(BookingForm::default);
    let (phase, submit) = use_simulated_submit("booking");

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit.emit(());
    });

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(BookingForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(BookingForm { phone: input.value(), ..(*form).clone() });
        })
    };
    let on_platform = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(BookingForm { platform: select.value(), ..(*form).clone() });
        })
    };
    let on_players = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(BookingForm { players: select.value(), ..(*form).clone() });
        })
    };
    let on_date = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(BookingForm { date: input.value(), ..(*form).clone() });
        })
    };
    let on_time = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(BookingForm { time: select.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(BookingForm { message: area.value(), ..(*form).clone() });
        })
    };

    let options = |choices: &'static [(&'static str, &'static str)], current: &str| -> Html {
        choices
            .iter()
            .map(|(value, label)| html! {
                <option key={*value} value={*value} selected={current == *value}>{ *label }</option>
            })
            .collect()
    };

    let body = if phase == SubmitPhase::Submitted {
        html! {
            <div class="success-panel hud-frame">
                <div class="trophy">{"🏆"}</div>
                <h3 class="font-display text-accent" style="font-size: 1.875rem;">{"SESSION BOOKED!"}</h3>
                <p class="text-muted" style="font-size: 1.125rem;">
                    {"We'll confirm your booking shortly. See you at the arena!"}
                </p>
                <p class="font-mono text-muted" style="font-size: 0.875rem;">
                    {"Or reach us directly: "}
                    <a href={config::PHONE_HREF} class="text-primary">{ config::PHONE_DISPLAY }</a>
                </p>
            </div>
        }
    } else {
        html! {
            <form class={classes!("booking-form", "hud-frame", "reveal", in_view)} style="transition-delay: 0.2s;" {onsubmit}>
                <div class="form-grid">
                    <div class="field">
                        <label for="booking-name">{"PLAYER NAME *"}</label>
                        <input id="booking-name" type="text" required={true} placeholder="Enter your name"
                            value={form.name.clone()} oninput={on_name} />
                    </div>
                    <div class="field">
                        <label for="booking-phone">{"PHONE NUMBER *"}</label>
                        <input id="booking-phone" type="tel" required={true} placeholder="+91 XXXXX XXXXX"
                            value={form.phone.clone()} oninput={on_phone} />
                    </div>
                    <div class="field">
                        <label for="booking-platform">{"PLATFORM *"}</label>
                        <select id="booking-platform" required={true} onchange={on_platform}>
                            <option value="" selected={form.platform.is_empty()}>{"Select platform"}</option>
                            { options(PLATFORMS, form.platform.as_str()) }
                        </select>
                    </div>
                    <div class="field">
                        <label for="booking-players">{"PLAYERS"}</label>
                        <select id="booking-players" onchange={on_players}>
                            <option value="" selected={form.players.is_empty()}>{"How many players?"}</option>
                            { options(PARTY_SIZES, form.players.as_str()) }
                        </select>
                    </div>
                    <div class="field">
                        <label for="booking-date">{"DATE *"}</label>
                        <input id="booking-date" type="date" required={true}
                            value={form.date.clone()} oninput={on_date} />
                    </div>
                    <div class="field">
                        <label for="booking-time">{"PREFERRED TIME"}</label>
                        <select id="booking-time" onchange={on_time}>
                            <option value="" selected={form.time.is_empty()}>{"Select time slot"}</option>
                            { options(TIME_SLOTS, form.time.as_str()) }
                        </select>
                    </div>
                </div>
                <div class="field" style="margin-bottom: 2rem;">
                    <label for="booking-message">{"SPECIAL REQUESTS"}</label>
                    <textarea id="booking-message" rows="3"
                        placeholder="Any specific games, birthday setup, tournament request..."
                        value={form.message.clone()} oninput={on_message} />
                </div>
                <div class="form-footer">
                    <p class="font-mono text-muted" style="font-size: 0.75rem;">{"* Required fields"}</p>
                    <div class="booking-actions">
                        <a class="outline-link accent" href={form.whatsapp_link(config::WHATSAPP_NUMBER)}
                            target="_blank" rel="noopener noreferrer">
                            {"💬 WHATSAPP"}
                        </a>
                        <CyberButton button_type="submit" variant={ButtonVariant::Primary} size={ButtonSize::Lg} glowing={true} disabled={phase.is_busy()}>
                            if phase.is_busy() {
                                <span class="spin">{"⚡"}</span>
                                {"BOOKING..."}
                            } else {
                                {"🎮 BOOK SESSION"}
                            }
                        </CyberButton>
                    </div>
                </div>
            </form>
        }
    };

    html! {
        <section id="booking" class="page-section">
            <style>
                {r#"
                .booking-vortex {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 800px;
                    height: 800px;
                    margin: -400px 0 0 -400px;
                    opacity: 0.1;
                    pointer-events: none;
                    background: conic-gradient(from 0deg, hsl(var(--primary)), hsl(var(--secondary)), hsl(var(--accent)), hsl(var(--primary)));
                    filter: blur(100px);
                    animation: spin 60s linear infinite;
                }
                .booking-badge { display: inline-block; font-size: 3.75rem; margin-bottom: 1rem; animation: booking-breathe 2s ease-in-out infinite; }
                @keyframes booking-breathe { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.1); } }
                .booking-form { padding: 2rem; }
                .booking-actions { display: flex; gap: 0.75rem; }
                .store-info { margin-top: 3rem; display: grid; gap: 1rem; }
                @media (min-width: 768px) { .store-info { grid-template-columns: repeat(3, 1fr); } }
                .store-card { display: block; padding: 1rem; text-align: center; transition: all 0.3s; }
                .store-card:hover { transform: scale(1.02); border-color: hsl(var(--primary)); box-shadow: 0 0 12px hsl(var(--primary) / 0.4); }
                .store-card .icon { display: block; font-size: 1.5rem; margin-bottom: 0.5rem; }
                .store-card .label { font-family: var(--font-mono); font-size: 10px; letter-spacing: 0.2em; color: hsl(var(--primary)); margin: 0 0 0.25rem; }
                .store-card .value { font-size: 0.875rem; color: hsl(var(--muted-foreground)); margin: 0; }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>
            <div class="booking-vortex"></div>

            <div ref={node} class="section-inner narrow">
                <div class={classes!("section-header", "reveal", in_view)}>
                    <div class="booking-badge">{"🎮"}</div>
                    <p class="section-eyebrow pulse">{"[ BOOK YOUR SESSION ]"}</p>
                    <h2 class="section-title">
                        <span class="text-foreground">{"READY TO"}</span>
                        <br />
                        <span class="text-gradient neon-text">{"PLAY?"}</span>
                    </h2>
                    <p class="section-subtitle">{"Reserve your gaming station and get ready for an epic session."}</p>
                </div>

                { body }

                <div class={classes!("store-info", "reveal", in_view)} style="transition-delay: 0.5s;">
                    { for STORE_INFO.iter().map(store_card) }
                </div>
            </div>
        </section>
    }
}

fn store_card(info: &StoreInfo) -> Html {
    let content = html! {
        <>
            <span class="icon">{ info.icon }</span>
            <p class="label">{ info.label }</p>
            <p class="value">{ info.value }</p>
        </>
    };

    match info.href {
        Some(href) if href.starts_with("http") => html! {
            <a key={info.label} class="store-card hud-frame" href={href} target="_blank" rel="noopener noreferrer">
                { content }
            </a>
        },
        Some(href) => html! {
            <a key={info.label} class="store-card hud-frame" href={href}>{ content }</a>
        },
        None => html! {
            <div key={info.label} class="store-card hud-frame">{ content }</div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingForm {
        BookingForm {
            name: "Arun".to_string(),
            phone: "9876543210".to_string(),
            platform: "vr".to_string(),
            players: "3-4".to_string(),
            date: "2024-06-01".to_string(),
            time: "18:00".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_message_without_note_ends_with_empty_line() {
        let message = filled().whatsapp_message();
        assert_eq!(
            message,
            "Hi Gamer's Creed! I'd like to book a session.\nName: Arun\nPlatform: vr\nPlayers: 3-4\nDate: 2024-06-01\nTime: 18:00\n"
        );
        assert!(!message.contains("Note:"));
    }

    #[test]
    fn test_message_includes_note_when_present() {
        let form = BookingForm {
            message: "birthday setup".to_string(),
            ..filled()
        };
        assert!(form.whatsapp_message().ends_with("\nTime: 18:00\nNote: birthday setup"));
    }

    #[test]
    fn test_link_is_fully_percent_encoded() {
        let form = BookingForm {
            message: "bring snacks".to_string(),
            ..filled()
        };
        let link = form.whatsapp_link("917010519965");

        assert!(link.starts_with("https://wa.me/917010519965?text=Hi%20Gamer%27s%20Creed%21"));
        assert!(link.contains("%0AName%3A%20Arun%0A"));
        assert!(link.ends_with("Note%3A%20bring%20snacks"));
        let text = &link["https://wa.me/917010519965?text=".len()..];
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_store_cards_link_maps_and_phone() {
        assert_eq!(STORE_INFO[0].href, Some(config::MAPS_SEARCH_URL));
        assert!(STORE_INFO[1].href.is_some_and(|href| href.starts_with("tel:")));
        assert!(STORE_INFO[2].href.is_none());
    }
}
