//! Browser bindings
//!
//! A thin adapter between the page and the engine: JS forwards clicks, key
//! presses and animation frames; the engine returns JSON views and events.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement};

use super::clock_seed;
use super::storage::LocalStorageStore;
use crate::drill::{
    AudioCue, Chapter, CuePlayer, DrillEvent, InputMode, Key, Session, SeededRng, Submission,
    play_cues,
};
use crate::fx::{DrawSurface, ParticleSystem, Rgb};
use crate::settings::DrillSettings;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Math Drill starting...");
}

/// 2D canvas used for the particle effects
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str("canvas not found"))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }
}

/// Plays cues through `<audio>` elements already on the page
#[derive(Debug, Default)]
pub struct DomAudio;

impl CuePlayer for DomAudio {
    fn play(&mut self, cue: AudioCue) {
        let audio = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(cue.element_id()))
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
        if let Some(audio) = audio {
            audio.set_current_time(0.0);
            // Autoplay may be refused before the first user gesture
            let _ = audio.play();
        }
    }
}

/// Drill instance owned by the page
#[wasm_bindgen]
pub struct WebDrill {
    settings: DrillSettings,
    store: LocalStorageStore,
    session: Option<Session<SeededRng>>,
    fx: ParticleSystem,
    fx_rng: SeededRng,
    surface: CanvasSurface,
    audio: DomAudio,
}

#[wasm_bindgen]
impl WebDrill {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Result<WebDrill, JsValue> {
        let store = LocalStorageStore::default();
        let settings = DrillSettings::load(&store);
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        surface.resize(width, height);
        Ok(Self {
            settings,
            store,
            session: None,
            fx: ParticleSystem::new(width as f32, height as f32),
            fx_rng: SeededRng::new(clock_seed()),
            surface,
            audio: DomAudio,
        })
    }

    /// Current settings as JSON
    pub fn settings_json(&self) -> String {
        serde_json::to_string(&self.settings).unwrap_or_default()
    }

    pub fn adjust_count(&mut self, delta: i32) -> u32 {
        self.settings.adjust_count(delta);
        self.settings.save(&mut self.store);
        self.settings.problem_count
    }

    pub fn adjust_countdown_seconds(&mut self, delta: i32) -> u32 {
        self.settings.adjust_countdown_seconds(delta);
        self.settings.save(&mut self.store);
        self.settings.countdown_seconds
    }

    /// Toggle `"choice"` or `"input"`; returns whether the mode is now enabled
    pub fn toggle_mode(&mut self, mode: &str) -> bool {
        let Some(mode) = InputMode::from_name(mode) else {
            log::warn!("Unknown input mode {mode:?}");
            return false;
        };
        if self.settings.toggle_mode(mode) {
            self.settings.save(&mut self.store);
        }
        self.settings.modes.contains(mode)
    }

    pub fn toggle_countdown(&mut self) -> bool {
        self.settings.toggle_countdown();
        self.settings.save(&mut self.store);
        self.settings.countdown_enabled
    }

    /// Start a session for a chapter id from the menu
    pub fn start(&mut self, chapter_id: i32) -> Result<(), JsValue> {
        let chapter = Chapter::from_id(chapter_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = self
            .settings
            .to_config()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.stop();
        let session = Session::start(chapter, &config, SeededRng::new(clock_seed()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session = Some(session);
        Ok(())
    }

    /// Tear down the session and any running effect
    pub fn stop(&mut self) {
        if let Some(session) = &mut self.session {
            session.stop();
        }
        self.session = None;
        self.fx.stop();
        self.surface.clear();
    }

    /// Animation frame: advance timers and effects, redraw the canvas
    pub fn frame(&mut self, dt: f32) {
        if let Some(session) = &mut self.session {
            session.tick(dt);
        }
        if self.fx.active_mode().is_some() || !self.fx.is_empty() {
            self.fx.advance(dt, &mut self.fx_rng);
            self.fx.render(&mut self.surface);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.fx.resize(width as f32, height as f32);
    }

    /// Choice-mode answer
    pub fn choose(&mut self, value: &str) {
        if let Some(session) = &mut self.session {
            session.submit(Submission::Value(value.to_string()));
        }
    }

    /// Keypad press by label (`"0"`..`"9"`, `"<"`, `">"`, `"="`, `"←"`)
    pub fn press_key(&mut self, label: &str) -> bool {
        match (Key::from_label(label), &mut self.session) {
            (Some(key), Some(session)) => session.press_key(key),
            _ => false,
        }
    }

    pub fn submit_entry(&mut self) {
        if let Some(session) = &mut self.session {
            session.submit_entry();
        }
    }

    /// Tap-to-continue
    pub fn skip(&mut self) {
        if let Some(session) = &mut self.session {
            session.skip();
        }
    }

    /// Current question view as JSON (`null` between questions)
    pub fn view_json(&self) -> String {
        let view = self.session.as_ref().and_then(|s| s.view());
        serde_json::to_string(&view).unwrap_or_else(|_| "null".to_string())
    }

    /// Take pending events as JSON, playing their sounds and starting the
    /// end-of-session effect
    pub fn drain_events_json(&mut self) -> String {
        let Some(session) = &mut self.session else {
            return "[]".to_string();
        };
        let events = session.drain_events();
        play_cues(&events, &mut self.audio);
        for event in &events {
            if let DrillEvent::SessionEnded { tier, .. } = event
                && let Some(mode) = tier.effect()
            {
                self.fx.start(mode);
            }
        }
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}
