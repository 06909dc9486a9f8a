//! Rendering of carousel state.

use crate::slide::ItemState;
use crate::tilt::ItemTransform;

/// Visual state of the whole carousel.
///
/// This is a platform-agnostic representation of what needs to be shown.
/// Each consumer maps it onto its own rendering backend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselView {
    /// Display state per item
    pub items: Vec<ItemState>,
    /// Active flag per indicator dot
    pub dots: Vec<bool>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Progress bar fill (0 - 100)
    pub progress: f64,
    /// Pointer is over the active item
    pub tilting: bool,
    /// Transform of the active item
    pub transform: ItemTransform,
}

impl CarouselView {
    /// Index of the active item, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|s| *s == ItemState::Active)
    }

    /// Progress as a CSS width, e.g. `"42%"`.
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress)
    }

    /// Inline transform for the active item.
    ///
    /// Always carries the configured lift and scale; rotation is added
    /// only while the item is tilted.
    pub fn active_transform_css(&self) -> String {
        self.transform.css()
    }
}

/// Web-specific rendering and event binding.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use crate::input::{CarouselEvent, Key};
    use crate::slide::ItemSet;
    use crate::tilt::ItemRect;
    use crate::timer::{reschedule, TimerHandle};
    use crate::{Carousel, CarouselConfig};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, KeyboardEvent,
        MouseEvent, TouchEvent, Window,
    };

    /// DOM elements driven by the carousel, plus the controller itself.
    struct Inner {
        carousel: Carousel,
        window: Window,
        items: ItemSet<HtmlElement>,
        dots: Vec<Element>,
        progress_bars: Vec<HtmlElement>,
        prev: Option<HtmlButtonElement>,
        next: Option<HtmlButtonElement>,
        /// Browser interval currently driving `Tick`, keyed by timer handle
        interval: Option<(TimerHandle, i32)>,
        tick_fn: Option<js_sys::Function>,
    }

    impl Inner {
        fn render(&self) {
            let view = self.carousel.view();

            for (index, item) in self.items.iter().enumerate() {
                let classes = item.class_list();
                for class in ItemState::CLASSES {
                    let _ = classes.remove_1(class);
                }
                let state = view.items.get(index).copied().unwrap_or(ItemState::Hidden);
                if let Some(class) = state.class_name() {
                    let _ = classes.add_1(class);
                }

                let style = item.style();
                let active = state == ItemState::Active;
                let _ = classes.toggle_with_force("tilt", active && view.tilting);
                if active {
                    let _ = style.set_property("transform", &view.active_transform_css());
                } else {
                    let _ = style.remove_property("transform");
                }
            }

            for (index, dot) in self.dots.iter().enumerate() {
                let active = view.dots.get(index).copied().unwrap_or(false);
                let _ = dot.class_list().toggle_with_force("active", active);
            }

            if let Some(prev) = &self.prev {
                prev.set_disabled(view.prev_disabled);
            }
            if let Some(next) = &self.next {
                next.set_disabled(view.next_disabled);
            }

            let width = view.progress_width();
            for bar in &self.progress_bars {
                let _ = bar.style().set_property("width", &width);
            }
        }

        /// Match the browser interval to the controller's live timer.
        ///
        /// The old interval is always cleared before a new one starts, so a
        /// stale interval can never fire a late tick.
        fn sync_interval(&mut self) {
            let live = self.carousel.timer().active_handle();
            let Some(plan) = reschedule(self.interval, live) else {
                return;
            };
            if let Some(id) = plan.cancel {
                self.window.clear_interval_with_handle(id);
                self.interval = None;
            }
            let (Some(handle), Some(tick_fn)) = (plan.start, &self.tick_fn) else {
                return;
            };
            match self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(tick_fn, self.carousel.interval_ms() as i32)
            {
                Ok(id) => self.interval = Some((handle, id)),
                Err(err) => log::warn!("failed to start auto-advance interval: {:?}", err),
            }
        }

        fn clear_interval(&mut self) {
            if let Some((_, id)) = self.interval.take() {
                self.window.clear_interval_with_handle(id);
            }
        }
    }

    fn dispatch(inner: &Rc<RefCell<Inner>>, event: CarouselEvent) {
        let mut inner = inner.borrow_mut();
        if inner.carousel.handle(event) {
            inner.render();
        }
        inner.sync_interval();
    }

    struct Listener {
        target: EventTarget,
        kind: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    }

    /// Carousel bound to live DOM elements.
    ///
    /// Dropping it removes every listener and stops auto-advance.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use media_carousel::{CarouselConfig, render::web::WebCarousel};
    ///
    /// let carousel = WebCarousel::attach_to_window(CarouselConfig::default())?;
    /// // keep `carousel` alive for the page session
    /// std::mem::forget(carousel);
    /// ```
    pub struct WebCarousel {
        inner: Rc<RefCell<Inner>>,
        listeners: Vec<Listener>,
        _tick: Closure<dyn FnMut()>,
    }

    impl WebCarousel {
        /// Attach to the global window's document.
        pub fn attach_to_window(config: CarouselConfig) -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or("No window available")?;
            let document = window.document().ok_or("No document available")?;
            Self::attach(&window, &document, config)
        }

        /// Find the carousel elements in `document` and wire up all input.
        ///
        /// Elements that are missing are skipped; the rest of the widget
        /// keeps working.
        pub fn attach(window: &Window, document: &Document, config: CarouselConfig) -> Result<Self, JsValue> {
            let selectors = config.selectors.clone();
            let items: ItemSet<HtmlElement> = query_all(document, &selectors.item)?
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect();
            let dots = query_all(document, &selectors.dot)?;
            let progress_bars = query_all(document, &selectors.progress)?
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect();
            let prev = query_button(document, &selectors.prev_button)?;
            let next = query_button(document, &selectors.next_button)?;
            let container = document.query_selector(&selectors.container)?;

            if items.is_empty() {
                log::warn!("no carousel items match {:?}", selectors.item);
            }

            let inner = Rc::new(RefCell::new(Inner {
                carousel: Carousel::for_items(&items, config),
                window: window.clone(),
                items,
                dots,
                progress_bars,
                prev: prev.clone(),
                next: next.clone(),
                interval: None,
                tick_fn: None,
            }));

            let tick = {
                let inner = inner.clone();
                Closure::<dyn FnMut()>::new(move || dispatch(&inner, CarouselEvent::Tick))
            };
            inner.borrow_mut().tick_fn = Some(tick.as_ref().unchecked_ref::<js_sys::Function>().clone());

            let mut carousel = Self {
                inner,
                listeners: Vec::new(),
                _tick: tick,
            };

            if let Some(prev) = prev {
                carousel.on_event(prev.into(), "click", |_| Some(CarouselEvent::Previous))?;
            }
            if let Some(next) = next {
                carousel.on_event(next.into(), "click", |_| Some(CarouselEvent::Next))?;
            }

            let dots: Vec<Element> = carousel.inner.borrow().dots.clone();
            for (index, dot) in dots.into_iter().enumerate() {
                carousel.on_event(dot.into(), "click", move |_| Some(CarouselEvent::Dot(index)))?;
            }

            carousel.on_event(document.clone().into(), "keydown", |event| {
                let key = event.dyn_ref::<KeyboardEvent>()?.key();
                Key::from_key_name(&key).map(CarouselEvent::Key)
            })?;

            match container {
                Some(container) => {
                    let target: EventTarget = container.into();
                    carousel.on_event(target.clone(), "touchstart", |event| {
                        let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
                        Some(CarouselEvent::TouchStart(touch.client_x() as f64))
                    })?;
                    carousel.on_event(target.clone(), "touchend", |event| {
                        let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
                        Some(CarouselEvent::TouchEnd(touch.client_x() as f64))
                    })?;
                    carousel.on_event(target.clone(), "mouseenter", |_| Some(CarouselEvent::PointerEnter))?;
                    carousel.on_event(target, "mouseleave", |_| Some(CarouselEvent::PointerLeave))?;
                }
                None => log::warn!("no carousel container matches {:?}", selectors.container),
            }

            carousel.bind_tilt()?;

            {
                let mut inner = carousel.inner.borrow_mut();
                inner.render();
                inner.sync_interval();
            }
            Ok(carousel)
        }

        /// Register a listener that maps a DOM event to a carousel event.
        fn on_event<F>(&mut self, target: EventTarget, kind: &'static str, mut map: F) -> Result<(), JsValue>
        where
            F: FnMut(&Event) -> Option<CarouselEvent> + 'static,
        {
            let inner = self.inner.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if let Some(event) = map(&event) {
                    dispatch(&inner, event);
                }
            });
            self.listen(target, kind, closure)
        }

        fn listen(&mut self, target: EventTarget, kind: &'static str, closure: Closure<dyn FnMut(Event)>) -> Result<(), JsValue> {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            self.listeners.push(Listener {
                target,
                kind,
                closure,
            });
            Ok(())
        }

        /// Pointer listeners on every item. Only the item the controller
        /// currently binds the tilt handler to reacts.
        fn bind_tilt(&mut self) -> Result<(), JsValue> {
            let items: Vec<HtmlElement> = self.inner.borrow().items.iter().cloned().collect();
            for (index, item) in items.into_iter().enumerate() {
                let target: EventTarget = item.clone().into();

                let inner = self.inner.clone();
                let enter = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                    let mut inner = inner.borrow_mut();
                    if inner.carousel.item_pointer_enter(index) {
                        inner.render();
                    }
                });
                self.listen(target.clone(), "mouseenter", enter)?;

                let inner = self.inner.clone();
                let element = item.clone();
                let moved = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let bounds = element.get_bounding_client_rect();
                    let rect = ItemRect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
                    let mut inner = inner.borrow_mut();
                    if let Some(transform) = inner.carousel.item_pointer_move(
                        index,
                        &rect,
                        mouse.client_x() as f64,
                        mouse.client_y() as f64,
                    ) {
                        let _ = element.style().set_property("transform", &transform.css());
                    }
                });
                self.listen(target.clone(), "mousemove", moved)?;

                let inner = self.inner.clone();
                let leave = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                    let mut inner = inner.borrow_mut();
                    if inner.carousel.item_pointer_leave(index).is_some() {
                        inner.render();
                    }
                });
                self.listen(target, "mouseleave", leave)?;
            }
            Ok(())
        }

        /// Current controller index.
        pub fn current_index(&self) -> usize {
            self.inner.borrow().carousel.current_index()
        }

        /// Feed an event programmatically, as if it came from the page.
        pub fn send(&self, event: CarouselEvent) {
            dispatch(&self.inner, event);
        }
    }

    impl Drop for WebCarousel {
        fn drop(&mut self) {
            for listener in self.listeners.drain(..) {
                let _ = listener
                    .target
                    .remove_event_listener_with_callback(listener.kind, listener.closure.as_ref().unchecked_ref());
            }
            if let Ok(mut inner) = self.inner.try_borrow_mut() {
                inner.clear_interval();
                inner.tick_fn = None;
            }
        }
    }

    fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
        let list = document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn query_button(document: &Document, selector: &str) -> Result<Option<HtmlButtonElement>, JsValue> {
        let button = document
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        if button.is_none() {
            log::warn!("no button matches {:?}", selector);
        }
        Ok(button)
    }
}
