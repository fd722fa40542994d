use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag shared between a mounted view and the tasks it spawned.
///
/// Clones observe the same flag. The view releases it on unmount; tasks check
/// it before applying a result.
#[derive(Debug, Clone)]
pub struct MountGuard {
    live: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn release(&self) {
        self.live.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
