use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::CarouselError;
use crate::ring::{Ring, Visibility};
use crate::view::{RingTransform, RingView};

/// Class of the panel elements inside the ring container.
pub const ITEM_SELECTOR: &str = ".carousel-item";

/// [`RingView`] over an existing ring container and its panel elements.
///
/// Panels are expected to be in the document already; binding only places
/// them on the ring.
pub struct DomRing {
    container: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DomRing {
    /// Find the `.carousel-item` panels under `container` and place each
    /// one on `ring`.
    pub fn bind(
        container: HtmlElement,
        ring: &Ring,
    ) -> Result<Self, CarouselError> {
        let nodes = container
            .query_selector_all(ITEM_SELECTOR)
            .map_err(|e| CarouselError::Dom(format!("{e:?}")))?;
        let mut items = Vec::with_capacity(ring.len());
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(el) = node.dyn_into::<HtmlElement>() {
                    items.push(el);
                }
            }
        }
        if items.len() < ring.len() {
            return Err(CarouselError::Dom(format!(
                "ring needs {} `{ITEM_SELECTOR}` elements, found {}",
                ring.len(),
                items.len()
            )));
        }
        items.truncate(ring.len());

        let depth = ring.item_depth();
        let width = format!("{}px", ring.item_width());
        for (el, item) in items.iter().zip(ring.items()) {
            let style = el.style();
            let placed = style
                .set_property("transform", &item.placement_css(depth))
                .and_then(|()| style.set_property("width", &width));
            placed.map_err(|e| CarouselError::Dom(format!("{e:?}")))?;
        }
        Ok(Self { container, items })
    }

    /// Panel elements in ring order.
    #[must_use]
    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }
}

impl RingView for DomRing {
    fn apply_transform(&mut self, transform: &RingTransform) {
        if let Err(e) = self
            .container
            .style()
            .set_property("transform", &transform.to_css())
        {
            log::warn!("failed to set ring transform: {e:?}");
        }
        if let Err(e) = self.container.set_attribute(
            "data-current-rotation",
            &transform.rotation.to_string(),
        ) {
            log::warn!("failed to set data-current-rotation: {e:?}");
        }
    }

    fn apply_visibility(&mut self, index: usize, visibility: Visibility) {
        let Some(el) = self.items.get(index) else {
            return;
        };
        let style = el.style();
        let applied = match visibility {
            Visibility::Hidden => style
                .set_property("visibility", "hidden")
                .and_then(|()| style.set_property("pointer-events", "none")),
            Visibility::Shown => style
                .remove_property("visibility")
                .and_then(|_| style.set_property("pointer-events", "auto")),
        };
        if let Err(e) = applied {
            log::warn!("failed to set visibility of item {index}: {e:?}");
        }
    }
}
