use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Atomic "add delta to this cell" for the accumulator element types.
///
/// Concurrent adds to the same cell are linearizable and commute: the final
/// value is the initial value plus the sum of all deltas, independent of
/// interleaving. Relaxed ordering is sufficient because nothing is published
/// through these cells mid-pass; the parallel join is the synchronization
/// point.
pub trait AtomicAdd {
    type Value: Copy;

    fn add(&self, delta: Self::Value);
    fn load(&self) -> Self::Value;
    fn reset(&self);
}

/// An `f64` cell stored as raw bits in an `AtomicU64`.
///
/// There is no native atomic add for floats, so `add` is an optimistic CAS
/// retry loop: read the current bits, compute the candidate sum, and swap it
/// in only if no other writer got there first; on conflict, recompute from
/// the freshly observed value and try again.
#[derive(Debug, Default)]
pub struct AtomicF64(AtomicU64);

impl AtomicAdd for AtomicF64 {
    type Value = f64;

    fn add(&self, delta: f64) {
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            let candidate = (f64::from_bits(current) + delta).to_bits();
            match self.0.compare_exchange_weak(
                current,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }

    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn reset(&self) {
        // 0u64 is the bit pattern of +0.0
        self.0.store(0, Ordering::Relaxed);
    }
}

/// An `i64` cell. Integers have a native atomic add, so no retry loop here.
#[derive(Debug, Default)]
pub struct AtomicCount(AtomicI64);

impl AtomicAdd for AtomicCount {
    type Value = i64;

    fn add(&self, delta: i64) {
        self.0.fetch_add(delta, Ordering::Relaxed);
    }

    fn load(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
