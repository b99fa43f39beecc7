//! Interrupt masking for the `*_atomic` entry points.
//!
//! The collections target a single main context plus interrupt handlers.
//! `push_atomic`/`pop_atomic` run one operation inside a [`CriticalSection`]
//! so a handler touching the same collection never observes a torn
//! length, head or tail.
//!
//! The guard restores the state it observed on entry; it does not count
//! nesting. Never call an `*_atomic` entry point from inside an interrupt
//! handler: leaving the section re-enables interrupts whenever they were
//! enabled on entry.

use core::marker::PhantomData;

/// Platform capability to query and mask interrupts.
///
/// Implement it over the target's real primitive. The query must report
/// the actual state; a constant answer makes the guard re-enable
/// interrupts that were masked by someone else.
pub trait InterruptControl {
    /// Returns `true` if interrupts are currently enabled.
    fn enabled() -> bool;
    /// Masks interrupts.
    fn disable();
    /// Unmasks interrupts.
    fn enable();
}

/// Scoped guard: interrupts are masked from `enter` until drop.
///
/// # Examples
///
/// ```
/// use array_collections::{CriticalSection, HostInterrupts, InterruptControl};
///
/// assert!(HostInterrupts::enabled());
/// {
///     let _section = CriticalSection::<HostInterrupts>::enter();
///     assert!(!HostInterrupts::enabled());
/// }
/// assert!(HostInterrupts::enabled());
/// ```
#[must_use = "interrupts are re-enabled as soon as the guard is dropped"]
pub struct CriticalSection<I: InterruptControl> {
    were_enabled: bool,
    // tied to the context that masked the interrupts
    control: PhantomData<*const I>,
}

impl<I: InterruptControl> CriticalSection<I> {
    /// Records the current interrupt state, then masks interrupts.
    #[inline]
    pub fn enter() -> CriticalSection<I> {
        let were_enabled = I::enabled();
        I::disable();
        CriticalSection {
            were_enabled,
            control: PhantomData,
        }
    }

    /// Returns the interrupt state observed on entry.
    #[inline]
    pub fn were_enabled(&self) -> bool {
        self.were_enabled
    }
}

impl<I: InterruptControl> Drop for CriticalSection<I> {
    #[inline]
    fn drop(&mut self) {
        if self.were_enabled {
            I::enable();
        }
    }
}

#[cfg(feature = "std")]
pub use self::host::HostInterrupts;

#[cfg(feature = "std")]
mod host {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::InterruptControl;

    static ENABLED: AtomicBool = AtomicBool::new(true);

    /// Emulated interrupt flag for hosted builds and tests.
    ///
    /// Tracks a real process-wide flag, so the guard's restore logic is
    /// exercised the same way it is on hardware.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct HostInterrupts;

    impl InterruptControl for HostInterrupts {
        #[inline]
        fn enabled() -> bool {
            ENABLED.load(Ordering::SeqCst)
        }

        #[inline]
        fn disable() {
            ENABLED.store(false, Ordering::SeqCst);
        }

        #[inline]
        fn enable() {
            ENABLED.store(true, Ordering::SeqCst);
        }
    }
}

/// Per-thread interrupt flag with a call log, for unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use super::InterruptControl;

    thread_local! {
        static ENABLED: Cell<bool> = Cell::new(true);
        static CALLS: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());
    }

    pub struct Recorder;

    impl Recorder {
        pub fn reset(enabled: bool) {
            ENABLED.with(|flag| flag.set(enabled));
            CALLS.with(|calls| calls.borrow_mut().clear());
        }

        pub fn calls() -> Vec<&'static str> {
            CALLS.with(|calls| calls.borrow().clone())
        }
    }

    impl InterruptControl for Recorder {
        fn enabled() -> bool {
            ENABLED.with(|flag| flag.get())
        }

        fn disable() {
            ENABLED.with(|flag| flag.set(false));
            CALLS.with(|calls| calls.borrow_mut().push("disable"));
        }

        fn enable() {
            ENABLED.with(|flag| flag.set(true));
            CALLS.with(|calls| calls.borrow_mut().push("enable"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;

    #[test]
    fn masks_and_restores_enabled() {
        Recorder::reset(true);
        {
            let section = CriticalSection::<Recorder>::enter();
            assert!(section.were_enabled());
            assert!(!Recorder::enabled());
        }
        assert!(Recorder::enabled());
        assert_eq!(Recorder::calls(), vec!["disable", "enable"]);
    }

    #[test]
    fn leaves_masked_interrupts_masked() {
        Recorder::reset(false);
        {
            let section = CriticalSection::<Recorder>::enter();
            assert!(!section.were_enabled());
        }
        assert!(!Recorder::enabled());
        assert_eq!(Recorder::calls(), vec!["disable"]);
    }

    #[test]
    fn properly_nested_sections() {
        Recorder::reset(true);
        {
            let _outer = CriticalSection::<Recorder>::enter();
            {
                let inner = CriticalSection::<Recorder>::enter();
                assert!(!inner.were_enabled());
            }
            assert!(!Recorder::enabled());
        }
        assert!(Recorder::enabled());
    }
}
