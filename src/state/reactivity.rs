// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista de subscribers compartida por todos los estados de la página
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers.
    /// Se copia la lista para que un callback pueda suscribir a otro.
    pub fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

/// Valor reactivo: cada escritura notifica al `ChangeNotifier`
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    notifier: ChangeNotifier,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T, notifier: ChangeNotifier) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            notifier,
        }
    }

    /// Leer sin clonar
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notifier.notify();
    }

    /// Actualizar valor usando closure y notificar.
    /// El borrow se libera antes de notificar.
    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut *self.value.borrow_mut());
        self.notifier.notify();
        result
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

// Los clones comparten valor y subscribers
impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_and_update_notify() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }

        let state = ReactiveState::new(1, notifier.clone());
        state.set(2);
        let doubled = state.update(|v| {
            *v *= 2;
            *v
        });

        assert_eq!(doubled, 4);
        assert_eq!(state.get(), 4);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }

        let state = ReactiveState::new(String::from("a"), notifier);
        let other = state.clone();
        other.set(String::from("b"));

        assert_eq!(state.with(|s| s.clone()), "b");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn subscriber_may_read_state_during_notify() {
        let notifier = ChangeNotifier::new();
        let state = ReactiveState::new(0, notifier.clone());
        let seen = Rc::new(Cell::new(-1));
        {
            let state = state.clone();
            let seen = seen.clone();
            notifier.subscribe(move || seen.set(state.get()));
        }

        state.update(|v| *v = 7);
        assert_eq!(seen.get(), 7);
    }
}
