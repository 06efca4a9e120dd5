//! Shadows of Silence entry point
//!
//! Wires the screen flow and the chase session to the page on web; runs a
//! scripted headless chase on native.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

    use shadows_of_silence::flow::{GameFlow, Screen, story};
    use shadows_of_silence::platform::web::{EventListeners, RafScheduler};
    use shadows_of_silence::prep::ToggleOutcome;
    use shadows_of_silence::prep::catalog::item_or_unknown;
    use shadows_of_silence::scene::{RenderAdapter, RenderFrame};
    use shadows_of_silence::sim::{Corridor, GameEvent, SessionPhase};
    use shadows_of_silence::{ChaseSession, Settings, Tuning};

    const SCREENS: [(Screen, &str); 5] = [
        (Screen::Landing, "screen-landing"),
        (Screen::Preparation, "screen-preparation"),
        (Screen::TimeUp, "screen-timeup"),
        (Screen::Complex, "screen-complex"),
        (Screen::Caught, "screen-caught"),
    ];

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(el: &Element, hidden: bool) {
        let _ = el.class_list().toggle_with_force("hidden", hidden);
    }

    /// Pushes frames into CSS custom properties; the stylesheet draws them
    struct DomRenderer {
        show_debug: bool,
    }

    impl DomRenderer {
        fn set_var(el: &HtmlElement, name: &str, value: f32) {
            let _ = el.style().set_property(name, &format!("{:.3}", value));
        }
    }

    impl RenderAdapter for DomRenderer {
        fn present(&mut self, frame: &RenderFrame) {
            let Some(doc) = document() else { return };
            if let Some(el) = doc
                .get_element_by_id("player")
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                Self::set_var(&el, "--x", frame.player.x);
                Self::set_var(&el, "--z", frame.player.z);
                Self::set_var(&el, "--rot", frame.player.rotation);
            }
            if let Some(el) = doc
                .get_element_by_id("shadow")
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let (x, y, z) = frame.shadow_draw_position();
                Self::set_var(&el, "--x", x);
                Self::set_var(&el, "--y", y);
                Self::set_var(&el, "--z", z);
                Self::set_var(&el, "--rot", frame.shadow.rotation);
                Self::set_var(&el, "--light", frame.ambience.light_intensity);
            }
            if self.show_debug {
                set_text(
                    "hud-debug",
                    &format!(
                        "player ({:.1}, {:.1}) shadow ({:.1}, {:.1}) gap {:.2}",
                        frame.player.x, frame.player.z, frame.shadow.x, frame.shadow.z, frame.distance
                    ),
                );
            }
        }

        fn build_corridor(&mut self, corridor: &Corridor) {
            if let Some(el) = document()
                .and_then(|d| d.get_element_by_id("corridor"))
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                Self::set_var(&el, "--width", corridor.width);
                Self::set_var(&el, "--length", corridor.length);
                Self::set_var(&el, "--height", corridor.height);
            }
        }
    }

    /// Everything the page needs between events
    struct App {
        flow: GameFlow,
        settings: Settings,
        tuning: Tuning,
        session: Option<ChaseSession<RafScheduler>>,
        renderer: DomRenderer,
        /// Keyboard/touch listeners, alive only while a chase runs
        chase_listeners: EventListeners,
        /// Preparation countdown interval
        prep_interval: Option<(i32, Closure<dyn FnMut()>)>,
        this: Weak<RefCell<App>>,
    }

    impl App {
        fn show_screen(&self) {
            let Some(doc) = document() else { return };
            let current = self.flow.screen();
            for (screen, id) in SCREENS {
                if let Some(el) = doc.get_element_by_id(id) {
                    set_hidden(&el, screen != current);
                }
            }
        }

        fn update_preparation_hud(&self) {
            let prep = self.flow.preparation();
            set_text("prep-time", &format!("{}s", prep.countdown.remaining_secs()));
            set_text(
                "prep-count",
                &format!("{}/{}", prep.loadout.len(), shadows_of_silence::consts::MAX_LOADOUT_ITEMS),
            );
            let names: Vec<&str> = prep
                .loadout
                .items()
                .iter()
                .map(|id| item_or_unknown(id).name)
                .collect();
            set_text("prep-selected", &names.join(", "));

            if let Some(el) = document()
                .and_then(|d| d.get_element_by_id("prep-progress"))
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                let _ = el
                    .style()
                    .set_property("width", &format!("{:.0}%", prep.countdown.progress() * 100.0));
            }
            if let Some(el) = document().and_then(|d| d.get_element_by_id("depart-btn")) {
                if prep.can_depart() {
                    let _ = el.remove_attribute("disabled");
                } else {
                    let _ = el.set_attribute("disabled", "");
                }
            }
        }

        fn start_countdown(&mut self) {
            self.stop_countdown();
            let this = self.this.clone();
            let tick = Closure::<dyn FnMut()>::new(move || {
                if let Some(app) = this.upgrade() {
                    let mut app = app.borrow_mut();
                    app.flow.advance_time(1.0);
                    app.update_preparation_hud();
                    if app.flow.screen() != Screen::Preparation {
                        app.stop_countdown_later();
                        app.show_screen();
                    }
                }
            });
            let id = web_sys::window().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .ok()
            });
            match id {
                Some(id) => self.prep_interval = Some((id, tick)),
                None => log::warn!("Could not start the preparation countdown"),
            }
        }

        fn stop_countdown(&mut self) {
            if let Some((id, _closure)) = self.prep_interval.take() {
                if let Some(w) = web_sys::window() {
                    w.clear_interval_with_handle(id);
                }
            }
        }

        /// Clear the interval but keep its closure alive until the next
        /// countdown replaces it; it may be the one running right now.
        fn stop_countdown_later(&mut self) {
            if let Some((id, _)) = &self.prep_interval {
                if let Some(w) = web_sys::window() {
                    w.clear_interval_with_handle(*id);
                }
            }
        }

        fn enter_complex(&mut self) {
            self.stop_countdown();
            let this = self.this.clone();
            let scheduler = RafScheduler::new(move |timestamp| {
                if let Some(app) = this.upgrade() {
                    app.borrow_mut().on_frame(timestamp);
                }
            });
            let session = ChaseSession::new(self.tuning.clone(), &self.settings, scheduler);
            self.renderer.build_corridor(session.corridor());
            self.session = Some(session);
            self.show_screen();
        }

        fn attach_chase_listeners(&mut self) {
            let Some(window) = web_sys::window() else { return };
            let Some(doc) = window.document() else { return };

            for (kind, held) in [("keydown", true), ("keyup", false)] {
                let this = self.this.clone();
                self.chase_listeners.add(&window, kind, move |event: Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
                    if let Some(app) = this.upgrade() {
                        if let Some(session) = app.borrow_mut().session.as_mut() {
                            if session.handle_key(&event.key(), held) {
                                event.prevent_default();
                            }
                        }
                    }
                });
            }

            // Focus loss would leave keys stuck down
            let this = self.this.clone();
            self.chase_listeners.add(&window, "blur", move |_event: Event| {
                if let Some(app) = this.upgrade() {
                    if let Some(session) = app.borrow_mut().session.as_mut() {
                        session.input_mut().release_all();
                    }
                }
            });

            if !self.settings.touch_controls {
                return;
            }
            let Ok(buttons) = doc.query_selector_all("#touch-controls [data-action]") else { return };
            for i in 0..buttons.length() {
                let Some(button) = buttons.item(i) else { continue };
                let Some(button) = button.dyn_ref::<Element>() else { continue };
                let Some(action) = button.get_attribute("data-action") else { continue };
                for (kind, held) in [("touchstart", true), ("touchend", false), ("touchcancel", false)] {
                    let this = self.this.clone();
                    let action = action.clone();
                    self.chase_listeners.add(button, kind, move |event: Event| {
                        event.prevent_default();
                        if let Some(app) = this.upgrade() {
                            if let Some(session) = app.borrow_mut().session.as_mut() {
                                session.set_action(&action, held);
                            }
                        }
                    });
                }
            }
            log::info!("Attached {} chase listeners", self.chase_listeners.len());
        }

        fn start_chase(&mut self) {
            let started = self.session.as_mut().map(|s| s.start()).unwrap_or(false);
            if started {
                self.attach_chase_listeners();
                if let Some(el) = document().and_then(|d| d.get_element_by_id("start-chase-btn")) {
                    set_hidden(&el, true);
                }
            }
        }

        fn on_frame(&mut self, timestamp: f64) {
            let Some(session) = self.session.as_mut() else { return };
            let event = session.on_frame(timestamp, &mut self.renderer);
            if let Some(GameEvent::Caught { distance, tick }) = event {
                log::info!("Session over on tick {} (gap {:.2})", tick, distance);
                self.chase_listeners.remove_all();
                self.flow.on_caught();
                set_text("caught-message", story::CAUGHT);
                self.show_screen();
            }
        }

        /// Page came back from the back/forward cache after `pagehide`
        fn resume_after_restore(&mut self) {
            match self.flow.screen() {
                Screen::Preparation if self.prep_interval.is_none() => {
                    self.start_countdown();
                    self.update_preparation_hud();
                }
                Screen::Complex => {
                    let resumed = self.session.as_mut().map(|s| s.resume()).unwrap_or(false);
                    if resumed && self.chase_listeners.is_empty() {
                        self.attach_chase_listeners();
                    }
                }
                _ => {}
            }
        }

        /// Reflect preferences on the page; chase options apply from the next session
        fn apply_settings(&mut self) {
            self.renderer.show_debug = self.settings.show_debug_hud;
            if !self.settings.show_debug_hud {
                set_text("hud-debug", "");
            }
            let Some(doc) = document() else { return };
            if let Some(el) = doc.get_element_by_id("touch-controls") {
                set_hidden(&el, !self.settings.touch_controls);
            }
            let Ok(buttons) = doc.query_selector_all("[data-setting]") else { return };
            for i in 0..buttons.length() {
                let Some(button) = buttons.item(i) else { continue };
                let Some(button) = button.dyn_ref::<Element>() else { continue };
                let Some(name) = button.get_attribute("data-setting") else { continue };
                let on = self.settings.flag(&name).unwrap_or(false);
                let _ = button.class_list().toggle_with_force("on", on);
            }
        }

        /// Page is going away or the player left the complex
        fn teardown_chase(&mut self) {
            if let Some(session) = self.session.as_mut() {
                if session.phase() == SessionPhase::Active {
                    session.stop();
                }
            }
            self.chase_listeners.remove_all();
        }
    }

    fn on_click(listeners: &mut EventListeners, id: &str, app: &Rc<RefCell<App>>, action: fn(&mut App)) {
        let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let this = Rc::downgrade(app);
        listeners.add(&el, "click", move |_event: Event| {
            if let Some(app) = this.upgrade() {
                action(&mut app.borrow_mut());
            }
        });
    }

    fn setup_page_listeners(app: &Rc<RefCell<App>>) -> EventListeners {
        let mut listeners = EventListeners::new();

        on_click(&mut listeners, "begin-btn", app, |app| {
            if app.flow.begin_story() {
                app.start_countdown();
                app.update_preparation_hud();
                app.show_screen();
            }
        });
        on_click(&mut listeners, "depart-btn", app, |app| {
            if app.flow.depart() {
                app.enter_complex();
            }
        });
        on_click(&mut listeners, "retry-btn", app, |app| {
            if app.flow.retry() {
                app.start_countdown();
                app.update_preparation_hud();
                app.show_screen();
            }
        });
        on_click(&mut listeners, "start-chase-btn", app, |app| app.start_chase());
        on_click(&mut listeners, "caught-ok-btn", app, |app| {
            if app.flow.acknowledge() {
                app.session = None;
                if let Some(el) = document().and_then(|d| d.get_element_by_id("start-chase-btn")) {
                    set_hidden(&el, false);
                }
                app.show_screen();
            }
        });

        // Item cards
        if let Some(Ok(cards)) = document().map(|d| d.query_selector_all("[data-item]")) {
            for i in 0..cards.length() {
                let Some(card) = cards.item(i) else { continue };
                let Some(card) = card.dyn_ref::<Element>() else { continue };
                let Some(id) = card.get_attribute("data-item") else { continue };
                let this = Rc::downgrade(app);
                let card_el = card.clone();
                listeners.add(card, "click", move |_event: Event| {
                    let Some(app) = this.upgrade() else { return };
                    let mut app = app.borrow_mut();
                    match app.flow.toggle_item(&id) {
                        ToggleOutcome::Added => {
                            let _ = card_el.class_list().add_1("selected");
                        }
                        ToggleOutcome::Removed => {
                            let _ = card_el.class_list().remove_1("selected");
                        }
                        outcome => log::debug!("Toggle `{}`: {:?}", id, outcome),
                    }
                    app.update_preparation_hud();
                });
            }
        }

        // Preference buttons
        if let Some(Ok(buttons)) = document().map(|d| d.query_selector_all("[data-setting]")) {
            for i in 0..buttons.length() {
                let Some(button) = buttons.item(i) else { continue };
                let Some(button) = button.dyn_ref::<Element>() else { continue };
                let Some(name) = button.get_attribute("data-setting") else { continue };
                let this = Rc::downgrade(app);
                listeners.add(button, "click", move |_event: Event| {
                    let Some(app) = this.upgrade() else { return };
                    let mut app = app.borrow_mut();
                    if app.settings.toggle(&name).is_some() {
                        app.settings.save();
                        app.apply_settings();
                    }
                });
            }
        }

        // Navigating away must not leave a frame or key listener behind
        if let Some(window) = web_sys::window() {
            let this = Rc::downgrade(app);
            listeners.add(&window, "pagehide", move |_event: Event| {
                if let Some(app) = this.upgrade() {
                    let mut app = app.borrow_mut();
                    app.teardown_chase();
                    app.stop_countdown();
                }
            });

            let this = Rc::downgrade(app);
            listeners.add(&window, "pageshow", move |_event: Event| {
                if let Some(app) = this.upgrade() {
                    app.borrow_mut().resume_after_restore();
                }
            });
        }

        listeners
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("{} starting...", story::TITLE);

        let settings = Settings::load();
        let tuning = Tuning::default();

        let app = Rc::new_cyclic(|this| {
            RefCell::new(App {
                flow: GameFlow::new(),
                renderer: DomRenderer {
                    show_debug: settings.show_debug_hud,
                },
                settings,
                tuning,
                session: None,
                chase_listeners: EventListeners::new(),
                prep_interval: None,
                this: this.clone(),
            })
        });

        set_text("story-title", story::TITLE);
        set_text("story-premise", &story::PREMISE.join("\n\n"));
        set_text("begin-btn", story::BEGIN);
        set_text("timeup-message", story::TIME_UP);

        app.borrow_mut().apply_settings();

        let page_listeners = setup_page_listeners(&app);
        log::info!("Attached {} page listeners", page_listeners.len());
        // Page listeners live as long as the page
        std::mem::forget(page_listeners);
        std::mem::forget(app.clone());

        app.borrow().show_screen();
        log::info!("{} ready", story::TITLE);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shadows_of_silence::platform::{ManualScheduler, now_ms};
    use shadows_of_silence::scene::{LogRenderer, RenderAdapter};
    use shadows_of_silence::sim::Action;
    use shadows_of_silence::{ChaseSession, Settings, Tuning};

    env_logger::init();
    log::info!("Shadows of Silence (native) starting...");
    log::info!("Native mode runs a scripted chase - use `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Bad tuning file {}: {}, using defaults", path, e);
                Tuning::default()
            }),
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let settings = Settings::load();
    let mut session = ChaseSession::new(tuning, &settings, ManualScheduler::new());
    let mut renderer = LogRenderer::new(60);
    renderer.build_corridor(session.corridor());

    let wall_start = now_ms();
    session.start();

    // Stand still while the shadow closes in, then walk into it
    let mut now = 0.0;
    let mut frames = 0u32;
    while session.scheduler_mut().fire().is_some() {
        if frames == 600 {
            log::info!("Walking toward the shadow");
            session.input_mut().set(Action::Forward, true);
        }
        if let Some(event) = session.on_frame(now, &mut renderer) {
            println!("{:?}", event);
        }
        now += 1000.0 / 60.0;
        frames += 1;
        if frames > 10_000 {
            log::warn!("Chase did not end, stopping");
            session.stop();
        }
    }

    println!(
        "Chase over after {} frames ({:.1}s simulated, {:.1} ms wall)",
        frames,
        session.state().elapsed,
        now_ms() - wall_start
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
