//! Pointer event wiring for the resize state machine

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, Window};

use crate::error::Result;
use crate::input::ResizeRouter;
use crate::math::Vec2;
use crate::window::ResizeHandle;
use super::dom::{self, Frame};
use super::util::log;
use super::Container;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

/// An attached event listener, detached again on drop
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    /// Closures must be stored to prevent garbage collection
    closure: Option<MouseClosure>,
}

impl Listener {
    fn attach(target: &EventTarget, event: &'static str, closure: MouseClosure) -> Result<Self> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    /// Keep the listener attached for the lifetime of the page
    pub(crate) fn leak(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

#[inline]
fn client_pos(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

/// Attach drag-start to every handle and drag-move/drag-end to the document
pub(crate) fn wire(
    frame: &Frame,
    router: &Rc<RefCell<ResizeRouter>>,
    container: &Container,
    window: &Window,
    document: &Document,
) -> Result<Vec<Listener>> {
    let body = document.body();
    let mut listeners = Vec::with_capacity(frame.handles.len() + 2);

    for (handle, el) in &frame.handles {
        let closure = on_handle_down(*handle, frame.root.clone(), router.clone(), body.clone());
        listeners.push(Listener::attach(el.as_ref(), "mousedown", closure)?);
    }

    let closure = on_pointer_move(
        frame.root.clone(),
        router.clone(),
        container.clone(),
        window.clone(),
    );
    listeners.push(Listener::attach(document.as_ref(), "mousemove", closure)?);

    let closure = on_pointer_up(router.clone(), body);
    listeners.push(Listener::attach(document.as_ref(), "mouseup", closure)?);

    Ok(listeners)
}

fn on_handle_down(
    handle: ResizeHandle,
    root: HtmlElement,
    router: Rc<RefCell<ResizeRouter>>,
    body: Option<HtmlElement>,
) -> MouseClosure {
    Closure::wrap(Box::new(move |event: MouseEvent| {
        event.prevent_default();
        let rect = match dom::read_rect(&root) {
            Ok(rect) => rect,
            Err(e) => {
                log(&format!("[border-window] cannot read geometry: {}", e));
                return;
            }
        };
        let mouse = client_pos(&event);
        router.borrow_mut().begin(handle, mouse, rect);
        if let Err(e) = dom::set_text_selection(body.as_ref(), false) {
            log(&format!("[border-window] {}", e));
        }
        log(&format!(
            "[border-window] resize {} start at ({:.0}, {:.0}) size={:.0}x{:.0}",
            handle, mouse.x, mouse.y, rect.width, rect.height
        ));
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn on_pointer_move(
    root: HtmlElement,
    router: Rc<RefCell<ResizeRouter>>,
    container: Container,
    window: Window,
) -> MouseClosure {
    Closure::wrap(Box::new(move |event: MouseEvent| {
        let router = router.borrow();
        if !router.is_resizing() {
            return;
        }
        let bounds = match container.bounds(&window) {
            Ok(bounds) => bounds,
            Err(e) => {
                log(&format!("[border-window] cannot read container bounds: {}", e));
                return;
            }
        };
        if let Some(rect) = router.update(client_pos(&event), bounds) {
            if let Err(e) = dom::apply_rect(&root, rect) {
                log(&format!("[border-window] {}", e));
            }
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn on_pointer_up(router: Rc<RefCell<ResizeRouter>>, body: Option<HtmlElement>) -> MouseClosure {
    Closure::wrap(Box::new(move |_event: MouseEvent| {
        // Only undo our own user-select; other mouseups leave the page's value alone
        if !router.borrow_mut().end() {
            return;
        }
        if let Err(e) = dom::set_text_selection(body.as_ref(), true) {
            log(&format!("[border-window] {}", e));
        }
        log("[border-window] resize end");
    }) as Box<dyn FnMut(MouseEvent)>)
}
