use folio_core::accordion::{self, Accordion};
use folio_core::capability::Capabilities;
use folio_core::catalog::Catalog;
use folio_core::config::{
    CursorConfig, HeroConfig, HoverParallaxConfig, NavConfig, StackConfig, TimelineConfig,
};
use folio_core::cursor::CursorFollower;
use folio_core::hero::HeroParallax;
use folio_core::layout;
use folio_core::nav::NavController;
use folio_core::reveal;
use folio_core::scheduler::{FrameHandle, FrameHost, FrameLoop};
use folio_core::stack::{CardStack, HoverParallax};
use folio_core::timeline::{ScrollGeometry, TimelineEngine};
use folio_protocol::Vec2;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn to_json(value: &impl Serialize) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(to_js_error)
}

/// Optional JSON config; defaults when absent. Callers validate.
fn parse_config<T: DeserializeOwned + Default>(json: Option<&str>) -> Result<T, JsError> {
    match json {
        Some(json) => serde_json::from_str(json).map_err(to_js_error),
        None => Ok(T::default()),
    }
}

/// `requestAnimationFrame` / `cancelAnimationFrame` passed in from JS.
struct JsFrameHost {
    request: js_sys::Function,
    cancel: js_sys::Function,
}

impl FrameHost for JsFrameHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let id = self.request.call0(&JsValue::NULL).ok()?.as_f64()?;
        Some(FrameHandle(id as u64))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        // Nothing useful to do if the host throws while cancelling.
        let _ = self
            .cancel
            .call1(&JsValue::NULL, &JsValue::from_f64(handle.0 as f64));
    }
}

/// One mounted select-works flip card.
///
/// JS records input through the `on_*` methods and calls `frame()` from
/// the callback passed as `request`; each call returns the frame output
/// as JSON, or `undefined` when the loop is paused or cancelled.
#[wasm_bindgen]
pub struct SelectWorksCard {
    engine: TimelineEngine,
    frames: FrameLoop<JsFrameHost>,
}

#[wasm_bindgen]
impl SelectWorksCard {
    /// `config_json` and `catalog_json` are optional; the built-in defaults
    /// and home-page rotation are used when absent.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        catalog_json: Option<String>,
        request: js_sys::Function,
        cancel: js_sys::Function,
    ) -> Result<SelectWorksCard, JsError> {
        let config = match config_json {
            Some(json) => TimelineConfig::from_json(&json).map_err(to_js_error)?,
            None => TimelineConfig::default(),
        };
        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(&json).map_err(to_js_error)?,
            None => Catalog::select_works(),
        };
        let engine = TimelineEngine::new(config, catalog).map_err(to_js_error)?;
        Ok(SelectWorksCard {
            engine,
            frames: FrameLoop::new(JsFrameHost { request, cancel }),
        })
    }

    pub fn set_capabilities(&mut self, reduced_motion: bool, touch_only: bool) {
        self.engine.set_capabilities(&Capabilities {
            reduced_motion,
            touch_only,
        });
    }

    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        section_top: f64,
        pin_offset: f64,
        viewport_height: f64,
    ) {
        self.engine.scroll(&ScrollGeometry {
            scroll_y,
            section_top,
            pin_offset,
            viewport_height,
        });
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.engine.pointer_move(x, y);
    }

    pub fn on_pointer_leave(&mut self) {
        self.engine.pointer_leave();
    }

    pub fn start(&mut self) {
        self.frames.start();
    }

    pub fn stop(&mut self) {
        self.frames.stop();
    }

    /// Feed from an intersection observer.
    pub fn set_visible(&mut self, visible: bool) {
        self.frames.set_visible(visible);
    }

    /// Animation-frame callback.
    pub fn frame(&mut self) -> Result<Option<String>, JsError> {
        if !self.frames.tick() {
            return Ok(None);
        }
        to_json(&self.engine.tick()).map(Some)
    }

    /// Re-send both faces and the marquee on the next frame.
    pub fn invalidate_content(&mut self) {
        self.engine.invalidate_content();
    }

    /// Scroll length of the pinned section, in viewport-heights.
    pub fn total_segments(&self) -> f64 {
        self.engine.layout().total()
    }

    /// Cancel the pending frame for good. Call on unmount.
    pub fn unmount(&mut self) {
        self.frames.cancel();
    }
}

#[wasm_bindgen]
pub struct Nav {
    inner: NavController,
}

#[wasm_bindgen]
impl Nav {
    #[wasm_bindgen(constructor)]
    pub fn new(initial_scroll_y: f64) -> Nav {
        Nav {
            inner: NavController::new(NavConfig::default(), initial_scroll_y),
        }
    }

    /// Returns `{ scrolled, collapsed }` as JSON.
    pub fn update(&mut self, scroll_y: f64) -> Result<String, JsError> {
        to_json(&self.inner.update(scroll_y))
    }
}

#[wasm_bindgen]
pub struct Hero {
    inner: HeroParallax,
}

#[wasm_bindgen]
impl Hero {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, depths: Vec<f64>) -> Result<Hero, JsError> {
        let config: HeroConfig = parse_config(config_json.as_deref())?;
        config.validate().map_err(to_js_error)?;
        Ok(Hero {
            inner: HeroParallax::new(config, depths),
        })
    }

    pub fn set_capabilities(&mut self, reduced_motion: bool, touch_only: bool) {
        self.inner.set_capabilities(&Capabilities {
            reduced_motion,
            touch_only,
        });
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        self.inner
            .pointer_move(Vec2::new(x, y), Vec2::new(viewport_width, viewport_height));
    }

    pub fn on_pointer_leave(&mut self) {
        self.inner.pointer_leave();
    }

    pub fn on_scroll(&mut self, hero_top: f64, hero_height: f64, viewport_height: f64) {
        self.inner.scroll(hero_top, hero_height, viewport_height);
    }

    pub fn frame(&mut self) -> Result<String, JsError> {
        to_json(&self.inner.tick())
    }
}

#[wasm_bindgen]
pub struct WorksStack {
    inner: CardStack,
}

#[wasm_bindgen]
impl WorksStack {
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        slides: usize,
        viewport_height: f64,
        bottom_percent: f64,
    ) -> Result<WorksStack, JsError> {
        let config: StackConfig = parse_config(config_json.as_deref())?;
        config.validate().map_err(to_js_error)?;
        Ok(WorksStack {
            inner: CardStack::new(config, slides, viewport_height, bottom_percent),
        })
    }

    pub fn pinned_distance(&self) -> f64 {
        self.inner.pinned_distance()
    }

    pub fn on_scroll(&mut self, scroll: f64, dt_ms: f64) {
        self.inner.on_scroll(scroll, dt_ms);
    }

    /// Negative clears the hover override.
    pub fn set_hovered(&mut self, slide: i32) {
        self.inner.set_hovered(usize::try_from(slide).ok());
    }

    pub fn frame(&mut self) -> Result<String, JsError> {
        to_json(&self.inner.tick())
    }
}

/// Works-page info panel that floats with the pointer over the stack.
#[wasm_bindgen]
pub struct InfoParallax {
    inner: HoverParallax,
}

#[wasm_bindgen]
impl InfoParallax {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<InfoParallax, JsError> {
        let config: HoverParallaxConfig = parse_config(config_json.as_deref())?;
        config.validate().map_err(to_js_error)?;
        Ok(InfoParallax {
            inner: HoverParallax::new(config),
        })
    }

    pub fn on_enter(&mut self, stack_height: f64, text_height: f64) {
        self.inner.enter(stack_height, text_height);
    }

    /// `normalized_y` is the pointer height over the stack, `0..=1`.
    pub fn on_pointer_move(&mut self, normalized_y: f64) {
        self.inner.pointer_move(normalized_y);
    }

    pub fn on_leave(&mut self) {
        self.inner.leave();
    }

    /// Call a short while after `on_leave`. Returns the rest offset to pin,
    /// or `undefined` if the pointer came back.
    pub fn settle(&mut self) -> Option<f64> {
        self.inner.settle()
    }

    /// Panel offset in pixels.
    pub fn frame(&mut self) -> f64 {
        self.inner.tick()
    }
}

/// Lerp-trailing cursor. `QuoteCursor::new` snaps on enter and stops
/// between targets; `QuoteCursor::trailing` is the works-page /VIEW cursor.
#[wasm_bindgen]
pub struct QuoteCursor {
    inner: CursorFollower,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CursorFrame {
    position: Vec2,
    visible: bool,
}

#[wasm_bindgen]
impl QuoteCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<QuoteCursor, JsError> {
        let config: CursorConfig = parse_config(config_json.as_deref())?;
        config.validate().map_err(to_js_error)?;
        Ok(QuoteCursor {
            inner: CursorFollower::new(config),
        })
    }

    pub fn trailing(config_json: Option<String>) -> Result<QuoteCursor, JsError> {
        let config: CursorConfig = parse_config(config_json.as_deref())?;
        config.validate().map_err(to_js_error)?;
        Ok(QuoteCursor {
            inner: CursorFollower::trailing(config),
        })
    }

    pub fn enter(&mut self, x: f64, y: f64) {
        self.inner.enter(Vec2::new(x, y));
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.inner.pointer_move(Vec2::new(x, y));
    }

    pub fn leave(&mut self) {
        self.inner.leave();
    }

    /// `{ position, visible }` as JSON, or `undefined` when idle.
    pub fn frame(&mut self) -> Result<Option<String>, JsError> {
        let Some(position) = self.inner.tick() else {
            return Ok(None);
        };
        to_json(&CursorFrame {
            position,
            visible: self.inner.is_visible(),
        })
        .map(Some)
    }
}

#[wasm_bindgen]
pub struct SkillsAccordion {
    inner: Accordion,
}

#[wasm_bindgen]
impl SkillsAccordion {
    /// Negative `open` means every row starts closed.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, open: i32) -> SkillsAccordion {
        SkillsAccordion {
            inner: Accordion::new(rows, usize::try_from(open).ok()),
        }
    }

    /// Returns `{ open, hasActive }` as JSON.
    pub fn toggle(&mut self, row: usize) -> Result<String, JsError> {
        to_json(&self.inner.toggle(row))
    }

    pub fn state(&self) -> Result<String, JsError> {
        to_json(&self.inner.state())
    }
}

/// Extra scroll for an expanded skills row, or `undefined` if it fits.
#[wasm_bindgen]
pub fn accordion_overflow_scroll(row_bottom: f64, viewport_height: f64) -> Option<f64> {
    accordion::overflow_scroll(row_bottom, viewport_height)
}

#[wasm_bindgen]
pub fn see_all_visible(intersection_ratio: f64, was_visible: bool) -> bool {
    reveal::see_all_visible(intersection_ratio, was_visible)
}

/// Logo rotation in degrees for the current page scroll.
#[wasm_bindgen]
pub fn logo_rotation(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    reveal::logo_rotation(scroll_y, scroll_height, viewport_height)
}

/// Quote reveal frame as JSON.
#[wasm_bindgen]
pub fn quote_reveal(
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
    words: usize,
) -> Result<String, JsError> {
    to_json(&reveal::quote_reveal(
        section_top,
        section_height,
        viewport_height,
        words,
    ))
}

#[wasm_bindgen]
pub fn active_href(path: &str) -> String {
    layout::active_href(path).to_owned()
}

#[wasm_bindgen]
pub fn logo_href(path: &str) -> String {
    layout::logo_href(path).to_owned()
}

#[derive(Serialize)]
struct NavEntry {
    #[serde(flatten)]
    link: layout::NavLink,
    active: bool,
}

/// `[{ label, href, active }]` as JSON.
#[wasm_bindgen]
pub fn nav_links(path: &str) -> Result<String, JsError> {
    let entries: Vec<NavEntry> = layout::nav_links(path)
        .map(|(link, active)| NavEntry { link, active })
        .collect();
    to_json(&entries)
}

#[wasm_bindgen]
pub fn escape_html(value: &str) -> String {
    layout::escape_html(value)
}
