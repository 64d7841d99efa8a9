//! Listeners that only exist for the duration of one mouse drag.
//!
//! Mouse move and release are observed on the whole document so a drag keeps
//! tracking after the cursor leaves the track. Those listeners are attached
//! on press and released on release, so repeated drags never accumulate
//! them.

use crate::input::{PointerEvent, PointerEventKind, PointerSource};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Owns the per-drag listeners of the drag in progress, if any.
pub struct DragScope<L> {
    slot: Rc<RefCell<Option<L>>>,
}

impl<L> DragScope<L> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Installs `listeners` for a drag that just started. Listeners left
    /// over from an earlier drag are released first.
    pub fn begin(&self, listeners: L) {
        let previous = self.slot.borrow_mut().replace(listeners);
        drop(previous);
    }

    /// Releases the current drag's listeners. Returns `false` when no drag
    /// was in progress.
    pub fn end(&self) -> bool {
        let released = self.slot.borrow_mut().take();
        released.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// A handle the listeners themselves can hold to end their own drag.
    pub fn downgrade(&self) -> WeakDragScope<L> {
        WeakDragScope {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Starts or ends the scope as `event` requires, calling `listeners` only
    /// when a mouse press opens a new drag.
    pub fn track(&self, event: &PointerEvent, listeners: impl FnOnce() -> L) {
        if event.source != PointerSource::Mouse {
            return;
        }
        match event.kind {
            PointerEventKind::Down => self.begin(listeners()),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.end();
            }
            PointerEventKind::Move => {}
        }
    }
}

impl<L> Default for DragScope<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Clone for DragScope<L> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<L> std::fmt::Debug for DragScope<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragScope")
            .field("active", &self.is_active())
            .finish()
    }
}

pub struct WeakDragScope<L> {
    slot: Weak<RefCell<Option<L>>>,
}

impl<L> WeakDragScope<L> {
    /// Ends the drag if the scope is still alive.
    pub fn end(&self) -> bool {
        match self.slot.upgrade() {
            Some(slot) => {
                let released = slot.borrow_mut().take();
                released.is_some()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use std::cell::Cell;

    struct Listener(Rc<Cell<usize>>);

    impl Listener {
        fn attach(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Listener(Rc::clone(live))
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn mouse(kind: PointerEventKind) -> PointerEvent {
        PointerEvent::mouse(kind, Point::new(0.0, 0.0))
    }

    #[test]
    fn listeners_live_from_press_to_release() {
        let live = Rc::new(Cell::new(0));
        let scope = DragScope::new();

        scope.track(&mouse(PointerEventKind::Down), || Listener::attach(&live));
        assert!(scope.is_active());
        assert_eq!(live.get(), 1);

        scope.track(&mouse(PointerEventKind::Move), || Listener::attach(&live));
        assert_eq!(live.get(), 1);

        scope.track(&mouse(PointerEventKind::Up), || Listener::attach(&live));
        assert!(!scope.is_active());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn a_second_press_replaces_the_previous_listeners() {
        let live = Rc::new(Cell::new(0));
        let scope = DragScope::new();

        for _ in 0..3 {
            scope.track(&mouse(PointerEventKind::Down), || Listener::attach(&live));
        }

        assert_eq!(live.get(), 1);
    }

    #[test]
    fn touches_never_open_a_scope() {
        let scope: DragScope<()> = DragScope::new();
        scope.track(
            &PointerEvent::touch(PointerEventKind::Down, Point::new(0.0, 0.0)),
            || (),
        );
        assert!(!scope.is_active());
    }

    #[test]
    fn weak_handle_ends_the_drag_from_inside_a_listener() {
        let scope = DragScope::new();
        scope.begin(());
        let weak = scope.downgrade();

        assert!(weak.end());
        assert!(!scope.is_active());
        assert!(!weak.end());

        drop(scope);
        assert!(!weak.end());
    }
}
