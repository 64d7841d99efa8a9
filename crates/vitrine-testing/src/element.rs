//! Recording stand-in for a DOM element.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use vitrine_core::{ClassTarget, TrackSurface};

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    transform: Option<String>,
    class_writes: usize,
}

/// Cheap, cloneable handle like `web_sys::Element`: clones share state, so a
/// test can keep one clone while the component owns another.
#[derive(Clone, Debug)]
pub struct FakeElement {
    name: Rc<str>,
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: Rc::from(name),
            state: Rc::new(RefCell::new(ElementState::default())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    pub fn transform(&self) -> Option<String> {
        self.state.borrow().transform.clone()
    }

    /// Number of class writes, including ones that changed nothing.
    pub fn class_writes(&self) -> usize {
        self.state.borrow().class_writes
    }
}

impl ClassTarget for FakeElement {
    fn set_class(&self, class: &str, enabled: bool) {
        let mut state = self.state.borrow_mut();
        state.class_writes += 1;
        if enabled {
            state.classes.insert(class.to_owned());
        } else {
            state.classes.remove(class);
        }
    }
}

impl TrackSurface for FakeElement {
    fn set_transform(&self, transform: &str) {
        self.state.borrow_mut().transform = Some(transform.to_owned());
    }
}
