//! Instrumented raw mutex.
//!
//! A spin lock implementing [`RawMutex`] that records, process-wide, how
//! often any instance was acquired, how often an acquirer had to wait, and
//! whether two critical sections ever overlapped. Taking the same instance
//! again from the thread that holds it panics instead of deadlocking.
//!
//! The counters are global: keep tests that read them in their own test
//! binary, or compare deltas of [`LockStats::snapshot`].

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;

static ACQUISITIONS: AtomicUsize = AtomicUsize::new(0);
static CONTENDED: AtomicUsize = AtomicUsize::new(0);
static OVERLAPS: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static THREAD_TOKEN: u8 = const { 0 };
}

fn thread_token() -> usize {
    THREAD_TOKEN.with(|token| token as *const u8 as usize)
}

/// Counter snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockStats {
    /// Critical sections entered
    pub acquisitions: usize,
    /// Acquisitions that found the lock taken and had to wait
    pub contended: usize,
    /// Critical sections that started while another was still running
    pub overlaps: usize,
}

impl LockStats {
    /// Read the current counters.
    pub fn snapshot() -> Self {
        Self {
            acquisitions: ACQUISITIONS.load(Ordering::SeqCst),
            contended: CONTENDED.load(Ordering::SeqCst),
            overlaps: OVERLAPS.load(Ordering::SeqCst),
        }
    }

    /// Counters accumulated since `earlier`.
    #[must_use]
    pub fn since(&self, earlier: &LockStats) -> LockStats {
        LockStats {
            acquisitions: self.acquisitions - earlier.acquisitions,
            contended: self.contended - earlier.contended,
            overlaps: self.overlaps - earlier.overlaps,
        }
    }
}

/// Spin-lock raw mutex with contention and overlap accounting.
pub struct InstrumentedRawMutex {
    locked: AtomicBool,
    holders: AtomicUsize,
    owner: AtomicUsize,
}

impl InstrumentedRawMutex {
    /// An unlocked mutex
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
            holders: AtomicUsize::new(0),
            owner: AtomicUsize::new(0),
        }
    }
}

impl Default for InstrumentedRawMutex {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the lock on drop so a panicking critical section still unlocks.
struct Release<'a>(&'a InstrumentedRawMutex);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        self.0.owner.store(0, Ordering::SeqCst);
        self.0.holders.fetch_sub(1, Ordering::SeqCst);
        self.0.locked.store(false, Ordering::Release);
    }
}

// SAFETY: `lock` runs `f` only while `locked` is held, and `locked` is only
// taken by a successful compare-exchange from `false`, so at most one caller
// is inside `f` at any time.
unsafe impl RawMutex for InstrumentedRawMutex {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = Self::new();

    fn lock<R>(&self, f: impl FnOnce() -> R) -> R {
        let me = thread_token();
        assert!(
            self.owner.load(Ordering::SeqCst) != me,
            "re-entrant lock: this thread already holds the panel lock"
        );

        let mut waited = false;
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            waited = true;
            std::thread::yield_now();
        }

        self.owner.store(me, Ordering::SeqCst);
        if self.holders.fetch_add(1, Ordering::SeqCst) != 0 {
            OVERLAPS.fetch_add(1, Ordering::SeqCst);
        }
        ACQUISITIONS.fetch_add(1, Ordering::SeqCst);
        if waited {
            CONTENDED.fetch_add(1, Ordering::SeqCst);
        }

        let _release = Release(self);
        f()
    }
}
