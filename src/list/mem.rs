use indexmap::IndexSet;
use std::hash::{BuildHasher, Hasher};

/// A hasher for slot addresses. Addresses are already unique `usize`s, so the
/// hash is the address itself.
pub(super) struct SlotHasher {
    hash: usize,
}

impl Hasher for SlotHasher {
    fn write(&mut self, _bytes: &[u8]) {
        panic!("Only slot addresses are hashed.");
    }

    fn write_usize(&mut self, i: usize) {
        self.hash = i;
    }

    fn finish(&self) -> u64 {
        self.hash as u64
    }
}

#[derive(Clone, Default)]
pub(super) struct BuildSlotHasher;

impl BuildHasher for BuildSlotHasher {
    type Hasher = SlotHasher;

    fn build_hasher(&self) -> Self::Hasher {
        SlotHasher { hash: 0 }
    }
}

/// Slot storage addressed by stable indices. Freed slots are remembered and
/// handed out again before the backing vector grows.
#[derive(Clone, Default)]
pub(super) struct Mem<T> {
    slots: Vec<T>,
    vacant: IndexSet<usize, BuildSlotHasher>,
}

impl<T> Mem<T> {
    pub(super) fn with_capacity(n: usize) -> Self {
        Self {
            slots: Vec::with_capacity(n),
            vacant: IndexSet::with_hasher(BuildSlotHasher),
        }
    }

    pub(super) fn intern(&mut self, t: T) -> usize {
        if let Some(addr) = self.vacant.pop() {
            self.slots[addr] = t;
            addr
        } else {
            let addr = self.slots.len();
            self.slots.push(t);
            addr
        }
    }

    #[inline]
    pub(super) fn get(&self, addr: usize) -> &T {
        &self.slots[addr]
    }

    #[inline]
    pub(super) fn get_mut(&mut self, addr: usize) -> &mut T {
        &mut self.slots[addr]
    }

    /// Marks `addr` as reusable. The caller must have unlinked it first.
    pub(super) fn free(&mut self, addr: usize) {
        self.vacant.insert(addr);
    }

    /// Forgets every slot at or after `from`, keeping the ones before it.
    pub(super) fn truncate(&mut self, from: usize) {
        self.slots.truncate(from);
        self.vacant.clear();
    }

    #[inline]
    pub(super) fn is_live(&self, addr: usize) -> bool {
        addr < self.slots.len() && !self.vacant.contains(&addr)
    }

    #[cfg(test)]
    pub(super) fn vacant_len(&self) -> usize {
        self.vacant.len()
    }
}
