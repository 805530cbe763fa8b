/// Something that can stop the page behind the overlay from scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Holds the page scroll lock for as long as it lives.
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Flag(Rc<Cell<bool>>);

    impl ScrollLock for Flag {
        fn lock(&self) {
            self.0.set(true);
        }
        fn unlock(&self) {
            self.0.set(false);
        }
    }

    #[test]
    fn guard_releases_on_drop() {
        let flag = Flag::default();
        let guard = ScrollGuard::acquire(flag.clone());
        assert!(flag.0.get());
        drop(guard);
        assert!(!flag.0.get());
    }
}
