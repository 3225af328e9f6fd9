//! Earth Slots entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

    use earth_slots::audio::{AudioManager, Tone};
    use earth_slots::consts::*;
    use earth_slots::game::symbols;
    use earth_slots::{BetSpec, GameSession, MachinePhase, Settings, StopEvent};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        audio: AudioManager,
        last_tick: f64,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_volume());
            Self {
                session: GameSession::new(seed),
                settings,
                audio,
                last_tick: 0.0,
            }
        }

        /// Advance reel animation at the 60ms cadence.
        fn frame(&mut self, time: f64) {
            if time - self.last_tick < TICK_MS {
                return;
            }
            self.last_tick = time;

            let frames = self.session.tick();
            let Some(document) = document() else { return };
            for (reel, frame) in frames.iter().enumerate() {
                if let Some(glyph) = frame {
                    render_reel_glyph(&document, reel, *glyph);
                }
            }
        }

        /// The single SPIN/STOP button: spin when idle, stop one reel when
        /// rolling.
        fn on_trigger(&mut self) {
            match self.session.phase() {
                MachinePhase::Idle => self.start_spin(),
                MachinePhase::Spinning => self.stop_next_reel(),
            }
        }

        fn start_spin(&mut self) {
            let Some(document) = document() else { return };
            let spec = read_bet_spec(&document);

            match self.session.request_spin(spec) {
                Ok(()) => {
                    set_message(&document, "Spinning...", None);
                    render_balance(&document, self.session.balance());
                    for reel in 0..REEL_COUNT {
                        set_reel_rolling(&document, reel, true);
                    }
                    set_trigger_label(&document, "STOP");
                }
                Err(err) => {
                    log::info!("bet rejected: {err:?}");
                    set_message(&document, err.message(), Some("bad"));
                    self.audio.play(Tone::Lose);
                }
            }
        }

        fn stop_next_reel(&mut self) {
            let Some(document) = document() else { return };
            match self.session.request_stop() {
                Some(StopEvent::ReelSettled { reel, glyph }) => {
                    render_reel_glyph(&document, reel, glyph);
                    set_reel_rolling(&document, reel, false);
                }
                Some(StopEvent::SpinComplete { reel, glyph, outcome, balance }) => {
                    render_reel_glyph(&document, reel, glyph);
                    set_reel_rolling(&document, reel, false);
                    render_balance(&document, balance);
                    render_last_result(&document, &outcome.symbols);

                    if outcome.is_win() {
                        let text =
                            format!("Winner! {} | +{:.1}", outcome.label(), outcome.win);
                        set_message(&document, &text, Some("good"));
                        self.audio.play(Tone::Win);
                    } else {
                        set_message(&document, "No luck. Try again.", Some("bad"));
                        self.audio.play(Tone::Lose);
                    }
                    set_trigger_label(&document, "SPIN");
                }
                None => {}
            }
        }

        fn on_reset(&mut self) {
            let Some(document) = document() else { return };
            if self.session.reset_ledger() {
                render_balance(&document, self.session.balance());
                set_message(&document, "Energy reset to 20.", None);
                self.audio.play(Tone::Neutral);
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.sfx_enabled = !self.settings.sfx_enabled;
            self.audio.set_volume(self.settings.effective_volume());
            save_settings(&self.settings);
            log::info!(
                "sfx {}",
                if self.settings.sfx_enabled { "enabled" } else { "muted" }
            );
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    /// "all" bets the whole balance; anything unparseable becomes NaN and
    /// is rejected by the session.
    fn read_bet_spec(document: &Document) -> BetSpec {
        let raw = document
            .get_element_by_id("bet")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        if raw.trim() == "all" {
            BetSpec::AllIn
        } else {
            BetSpec::Amount(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
        }
    }

    fn icon_html(glyph: char) -> String {
        match symbols::by_glyph(glyph) {
            Some(sym) => format!(
                "<img src=\"./imgs/{}\" alt=\"{}\" width=\"64\" height=\"64\">",
                sym.icon, sym.glyph
            ),
            None => glyph.to_string(),
        }
    }

    fn reel_cell(document: &Document, reel: usize) -> Option<Element> {
        document
            .query_selector(&format!("#reel{reel} .cell"))
            .ok()
            .flatten()
    }

    fn render_reel_glyph(document: &Document, reel: usize, glyph: char) {
        if let Some(cell) = reel_cell(document, reel) {
            cell.set_inner_html(&icon_html(glyph));
        }
    }

    fn set_reel_rolling(document: &Document, reel: usize, rolling: bool) {
        if let Some(el) = document.get_element_by_id(&format!("reel{reel}")) {
            let class_list = el.class_list();
            let _ = if rolling {
                class_list.add_1("rolling")
            } else {
                class_list.remove_1("rolling")
            };
        }
    }

    fn render_balance(document: &Document, balance: f64) {
        if let Some(el) = document.get_element_by_id("credit") {
            el.set_text_content(Some(&format!("{balance:.1}")));
        }
    }

    fn render_last_result(document: &Document, symbols: &[char; 3]) {
        if let Some(el) = document.get_element_by_id("last") {
            let html: String = symbols.iter().map(|&g| icon_html(g)).collect();
            el.set_inner_html(&html);
        }
    }

    fn set_message(document: &Document, text: &str, tone: Option<&str>) {
        if let Some(el) = document.get_element_by_id("msg") {
            el.set_text_content(Some(text));
            let class_list = el.class_list();
            let _ = class_list.remove_2("good", "bad");
            if let Some(tone) = tone {
                let _ = class_list.add_1(tone);
            }
        }
    }

    fn set_trigger_label(document: &Document, label: &str) {
        if let Some(el) = document.get_element_by_id("spin") {
            el.set_text_content(Some(label));
        }
    }

    fn load_settings() -> Settings {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Settings::STORAGE_KEY).ok())
            .flatten();
        match stored {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Settings::default(),
        }
    }

    fn save_settings(settings: &Settings) {
        if let Ok(json) = serde_json::to_string(settings) {
            if let Some(storage) = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
            {
                let _ = storage.set_item(Settings::STORAGE_KEY, &json);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Earth Slots starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = load_settings();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Session initialized with seed: {seed}");

        // Initial display
        render_balance(&document, game.borrow().session.balance());
        if let Some(input) = document
            .get_element_by_id("bet")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(&format!("{}", game.borrow().settings.default_bet));
        }

        setup_input_handlers(&document, game.clone());
        request_animation_frame(game);

        log::info!("Earth Slots running!");
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // SPIN/STOP button
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().on_trigger();
            });
            if let Some(el) = document.get_element_by_id("spin") {
                let _ = el
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Reset button
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().on_reset();
            });
            if let Some(el) = document.get_element_by_id("reset") {
                let _ = el
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Keyboard: Enter spins/stops, M toggles sound
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "Enter" => game.borrow_mut().on_trigger(),
                    "m" | "M" => game.borrow_mut().toggle_mute(),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Earth Slots (native) starting...");
    log::info!("The playable version is the web build - this runs a demo session");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    demo_session(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// A few auto-stopped spins at bet 1.0, printed to stdout.
#[cfg(not(target_arch = "wasm32"))]
fn demo_session(seed: u64) {
    use earth_slots::{BetSpec, GameSession, StopEvent};

    let mut session = GameSession::new(seed);
    println!("seed {seed}, starting credit {:.1}", session.balance());

    for round in 1..=5 {
        if session.request_spin(BetSpec::Amount(1.0)).is_err() {
            println!("round {round}: out of credit");
            break;
        }
        // Let the reels churn a little before stopping them
        for _ in 0..10 {
            session.tick();
        }
        let outcome = loop {
            match session.request_stop() {
                Some(StopEvent::SpinComplete { outcome, .. }) => break outcome,
                Some(StopEvent::ReelSettled { .. }) => continue,
                None => unreachable!("spin in flight"),
            }
        };
        println!(
            "round {round}: {} {} {} -> {} | credit {:.1}",
            outcome.symbols[0],
            outcome.symbols[1],
            outcome.symbols[2],
            outcome.label(),
            session.balance()
        );
    }
}
