//! Browser binding: DOM view, `requestAnimationFrame` scheduling, mouse
//! listeners, and the JavaScript-facing [`WebCarousel`].
//!
//! ```js
//! import init, { initLogging, WebCarousel } from "./carousel.js";
//! await init();
//! initLogging();
//! const carousel = new WebCarousel(".carousel-content", {
//!   ring: { item_count: 12, item_width: 536 },
//! });
//! window.addEventListener("beforeunload", () => carousel.destroy());
//! ```

mod dom;
mod events;
mod hover;
mod raf;

use std::rc::Rc;

pub use dom::DomRing;
pub use events::DomPointerSource;
pub use hover::HoverLabels;
pub use raf::{FrameCallback, RafScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::carousel::{Carousel, SharedController};
use crate::error::CarouselError;
use crate::options::CarouselOptions;
use crate::ring::Ring;

/// Controller type used in the browser.
pub type SharedWebController = SharedController<RafScheduler, DomRing>;

impl From<CarouselError> for JsValue {
    fn from(e: CarouselError) -> Self {
        Self::from_str(&e.to_string())
    }
}

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}

/// A carousel bound to a container element in the page.
#[wasm_bindgen]
pub struct WebCarousel {
    inner: Carousel<DomPointerSource, RafScheduler, DomRing>,
    hover: HoverLabels,
    frame_callback: FrameCallback,
}

#[wasm_bindgen]
impl WebCarousel {
    /// Bind to the first element matching `selector`. `options` is an
    /// optional plain object shaped like [`CarouselOptions`].
    #[wasm_bindgen(constructor)]
    pub fn new(
        selector: &str,
        options: JsValue,
    ) -> Result<WebCarousel, JsValue> {
        let options = parse_options(&options)?;
        options.validate()?;

        let window = web_sys::window()
            .ok_or_else(|| CarouselError::Dom("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| CarouselError::Dom("no document".into()))?;
        let container = document
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| {
                CarouselError::Dom(format!("no element matches `{selector}`"))
            })?;

        let view = DomRing::bind(container, &Ring::new(&options.ring))?;
        let frame_callback = FrameCallback::default();
        let scheduler =
            RafScheduler::new(window.clone(), Rc::clone(&frame_callback));
        let source = DomPointerSource::new(window.into());
        let inner = Carousel::attach(options, scheduler, view, source)?;

        let weak = Rc::downgrade(inner.controller());
        *frame_callback.borrow_mut() =
            Some(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                // At most one request is outstanding, and cancelled ones
                // never fire, so the pending handle is the one that fired.
                let pending = controller.borrow().phase().pending_frame();
                if let Some(handle) = pending {
                    controller.borrow_mut().on_frame(handle);
                }
            }));

        let hover = HoverLabels::attach(inner.controller())?;
        log::info!(
            "carousel bound to `{selector}` with {} items",
            inner.controller().borrow().ring().len()
        );
        Ok(Self {
            inner,
            hover,
            frame_callback,
        })
    }

    /// Current ring rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.inner.rotation()
    }

    /// Release every listener and cancel any pending frame. Safe to call
    /// repeatedly; the carousel ignores all input afterwards.
    pub fn destroy(&mut self) {
        self.inner.detach();
        self.hover.release();
        drop(self.frame_callback.borrow_mut().take());
    }
}

impl Drop for WebCarousel {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn parse_options(options: &JsValue) -> Result<CarouselOptions, CarouselError> {
    if options.is_undefined() || options.is_null() {
        return Ok(CarouselOptions::default());
    }
    let json = js_sys::JSON::stringify(options)
        .map_err(|e| CarouselError::OptionsParse(format!("{e:?}")))?;
    CarouselOptions::from_json_str(&String::from(json))
}

