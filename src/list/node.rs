/// A single cell of a [`LinkedList`](super::LinkedList).
///
/// Links are slot addresses into the list's arena, so a node never owns its
/// neighbours. Sentinels are nodes without data.
#[derive(Clone, Default)]
pub(super) struct Node<T> {
    data: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    pub(super) fn sentinel(prev: usize, next: usize) -> Self {
        Self {
            data: None,
            prev,
            next,
        }
    }

    pub(super) fn init(t: T, prev: usize, next: usize) -> Self {
        Self {
            data: Some(t),
            prev,
            next,
        }
    }

    #[inline]
    pub(super) fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[inline]
    pub(super) fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Moves the value out, leaving the node empty.
    #[inline]
    pub(super) fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    #[inline]
    pub(super) fn prev(&self) -> usize {
        self.prev
    }

    #[inline]
    pub(super) fn next(&self) -> usize {
        self.next
    }

    #[inline]
    pub(super) fn set_prev(&mut self, addr: usize) {
        self.prev = addr;
    }

    #[inline]
    pub(super) fn set_next(&mut self, addr: usize) {
        self.next = addr;
    }
}
