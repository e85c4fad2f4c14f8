// ============================================================================
// EVENT HANDLING
// ============================================================================
// Los closures de click no se olvidan con forget(): quedan en un registro
// por render. App::render vacía el DOM y luego llama a release_listeners(),
// así cada re-render suelta los closures del render anterior.
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

/// Dueño de los listeners del render actual
pub struct ListenerRegistry<T> {
    items: RefCell<Vec<T>>,
}

impl<T> ListenerRegistry<T> {
    pub const fn new() -> Self {
        Self { items: RefCell::new(Vec::new()) }
    }

    pub fn keep(&self, listener: T) {
        self.items.borrow_mut().push(listener);
    }

    /// Suelta todos los listeners; devuelve cuántos había
    pub fn release(&self) -> usize {
        // Sacar el Vec antes de soltarlo: un Drop no debe ver el RefCell prestado
        let released = std::mem::take(&mut *self.items.borrow_mut());
        released.len()
    }
}

thread_local! {
    static CLICK_LISTENERS: ListenerRegistry<Closure<dyn FnMut(MouseEvent)>> = const { ListenerRegistry::new() };
}

/// Helper para crear click handler; el closure vive hasta el próximo `release_listeners()`
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    CLICK_LISTENERS.with(|listeners| listeners.keep(closure));
    Ok(())
}

/// Llamar sólo después de quitar del DOM los elementos del render anterior
pub fn release_listeners() -> usize {
    CLICK_LISTENERS.with(ListenerRegistry::release)
}
