use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::SharedWebController;
use crate::error::CarouselError;

/// Class of the optional caption element inside a panel.
pub const LABEL_SELECTOR: &str = ".carousel-text";

type Listener = (HtmlElement, &'static str, Closure<dyn FnMut(MouseEvent)>);

/// Hover captions that turn to face the viewer.
///
/// Panels without a `.carousel-text` child are skipped.
#[derive(Default)]
pub struct HoverLabels {
    listeners: Vec<Listener>,
}

impl HoverLabels {
    /// Register enter/leave listeners on every panel that has a caption.
    pub fn attach(
        controller: &SharedWebController,
    ) -> Result<Self, CarouselError> {
        let mut labels = Self::default();
        let c = controller.borrow();
        let tilt = c.options().ring.tilt;
        for (panel, item) in c.view().items().iter().zip(c.ring().items()) {
            let Some(label) = panel
                .query_selector(LABEL_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let item = *item;

            let weak = Rc::downgrade(controller);
            let caption = label.clone();
            let enter = Closure::<dyn FnMut(MouseEvent)>::new(
                move |_: MouseEvent| {
                    let Some(controller) = weak.upgrade() else {
                        return;
                    };
                    let Ok(controller) = controller.try_borrow() else {
                        return;
                    };
                    let css = item.label_transform(controller.rotation(), tilt);
                    set_label(&caption, Some(&css));
                },
            );
            labels.listen(panel, "mouseenter", enter)?;

            let leave = Closure::<dyn FnMut(MouseEvent)>::new(
                move |_: MouseEvent| set_label(&label, None),
            );
            labels.listen(panel, "mouseleave", leave)?;
        }
        Ok(labels)
    }

    fn listen(
        &mut self,
        panel: &HtmlElement,
        kind: &'static str,
        closure: Closure<dyn FnMut(MouseEvent)>,
    ) -> Result<(), CarouselError> {
        panel
            .add_event_listener_with_callback(
                kind,
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|e| {
                CarouselError::Dom(format!(
                    "failed to add {kind} listener: {e:?}"
                ))
            })?;
        self.listeners.push((panel.clone(), kind, closure));
        Ok(())
    }

    /// Remove every listener. Safe to call repeatedly.
    pub fn release(&mut self) {
        for (panel, kind, closure) in self.listeners.drain(..) {
            if let Err(e) = panel.remove_event_listener_with_callback(
                kind,
                closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove {kind} listener: {e:?}");
            }
        }
    }
}

/// Show the caption with `transform`, or hide it when `None`.
fn set_label(label: &HtmlElement, transform: Option<&str>) {
    let classes = label.class_list();
    let result = match transform {
        Some(css) => label
            .style()
            .set_property("transform", css)
            .and_then(|()| classes.add_1("active"))
            .and_then(|()| classes.remove_1("hide")),
        None => classes
            .remove_1("active")
            .and_then(|()| classes.add_1("hide")),
    };
    if let Err(e) = result {
        log::warn!("failed to update caption: {e:?}");
    }
}

impl Drop for HoverLabels {
    fn drop(&mut self) {
        self.release();
    }
}
