mod mem;
mod node;

use std::{fmt, iter};
use thiserror::Error;

use mem::Mem;
use node::Node;

const HEAD_ADDR: usize = 0;
const TAIL_ADDR: usize = 1;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("The collection is empty.")]
    EmptyCollection,
}

/// A doubly linked list bounded by two sentinel nodes, with a single cursor.
///
/// Nodes live in an arena and refer to each other by slot address. The head
/// sentinel is always at `HEAD_ADDR` and the tail sentinel at `TAIL_ADDR`;
/// every real node sits strictly between them. The cursor (`current`) is an
/// address as well, so it can rest on a sentinel but never dangles: every
/// removal moves it to a node that is still linked.
#[derive(Clone)]
pub struct LinkedList<T> {
    mem: Mem<Node<T>>,
    current: usize,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> LinkedList<T> {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        let mut mem = Mem::with_capacity(n + 2);
        assert_eq!(mem.intern(Node::sentinel(HEAD_ADDR, TAIL_ADDR)), HEAD_ADDR);
        assert_eq!(mem.intern(Node::sentinel(HEAD_ADDR, TAIL_ADDR)), TAIL_ADDR);
        Self {
            mem,
            current: HEAD_ADDR,
            len: 0,
        }
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        let mut list = Self::with_capacity(vec.len());
        vec.into_iter().for_each(|t| list.push_back(t));
        list
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn first_addr(&self) -> usize {
        self.mem.get(HEAD_ADDR).next()
    }

    #[inline]
    fn last_addr(&self) -> usize {
        self.mem.get(TAIL_ADDR).prev()
    }

    /// Addresses of the real nodes, head to tail.
    fn addrs(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(Some(self.first_addr()), |&addr| {
            Some(self.mem.get(addr).next())
        })
        .take_while(|&addr| addr != TAIL_ADDR)
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.addrs().filter_map(|addr| self.mem.get(addr).data())
    }

    fn value_at(&self, addr: usize) -> Result<&T, ListError> {
        self.mem
            .get(addr)
            .data()
            .ok_or(ListError::EmptyCollection)
    }

    fn value_at_mut(&mut self, addr: usize) -> Result<&mut T, ListError> {
        self.mem
            .get_mut(addr)
            .data_mut()
            .ok_or(ListError::EmptyCollection)
    }

    /// Links a new node right after `addr` and returns its address.
    fn link_after(&mut self, t: T, addr: usize) -> usize {
        debug_assert!(self.mem.is_live(addr) && addr != TAIL_ADDR);
        let next = self.mem.get(addr).next();
        let new_addr = self.mem.intern(Node::init(t, addr, next));
        self.mem.get_mut(addr).set_next(new_addr);
        self.mem.get_mut(next).set_prev(new_addr);
        self.len += 1;
        new_addr
    }

    /// Unlinks the real node at `addr`, returning its value and the address of
    /// its successor. Sentinels are rejected before anything is touched.
    fn unlink(&mut self, addr: usize) -> Result<(T, usize), ListError> {
        let node = self.mem.get_mut(addr);
        let t = node.take_data().ok_or(ListError::EmptyCollection)?;
        let (prev, next) = (node.prev(), node.next());
        self.mem.get_mut(prev).set_next(next);
        self.mem.get_mut(next).set_prev(prev);
        self.mem.free(addr);
        self.len -= 1;
        Ok((t, next))
    }

    pub fn push_front(&mut self, t: T) {
        self.link_after(t, HEAD_ADDR);
    }

    pub fn push_back(&mut self, t: T) {
        self.link_after(t, self.last_addr());
    }

    /// Inserts `t` right after the cursor and moves the cursor onto it.
    /// Returns `false` without inserting when the cursor is on the tail
    /// sentinel.
    pub fn insert(&mut self, t: T) -> bool {
        if self.current == TAIL_ADDR {
            return false;
        }
        self.current = self.link_after(t, self.current);
        true
    }

    /// Removes the first value. The cursor goes back to the head sentinel.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let (t, _) = self.unlink(self.first_addr())?;
        self.current = HEAD_ADDR;
        Ok(t)
    }

    /// Removes the last value. The cursor goes back to the head sentinel.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let (t, _) = self.unlink(self.last_addr())?;
        self.current = HEAD_ADDR;
        Ok(t)
    }

    /// Removes the value under the cursor. The cursor moves to the node that
    /// followed it, which is the tail sentinel if the last value was removed.
    pub fn remove(&mut self) -> Result<T, ListError> {
        let (t, next) = self.unlink(self.current)?;
        self.current = next;
        Ok(t)
    }

    /// Drops every value. The sentinels survive and the cursor goes back to
    /// the head sentinel.
    pub fn clear(&mut self) {
        self.mem.truncate(TAIL_ADDR + 1);
        self.mem.get_mut(HEAD_ADDR).set_next(TAIL_ADDR);
        self.mem.get_mut(TAIL_ADDR).set_prev(HEAD_ADDR);
        self.current = HEAD_ADDR;
        self.len = 0;
    }

    #[inline]
    pub fn front(&self) -> Result<&T, ListError> {
        self.value_at(self.first_addr())
    }

    #[inline]
    pub fn back(&self) -> Result<&T, ListError> {
        self.value_at(self.last_addr())
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.value_at_mut(self.first_addr())
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        self.value_at_mut(self.last_addr())
    }

    /// Fails when the cursor rests on a sentinel, which includes every cursor
    /// position of an empty list.
    #[inline]
    pub fn get_current(&self) -> Result<&T, ListError> {
        self.value_at(self.current)
    }

    #[inline]
    pub fn get_current_mut(&mut self) -> Result<&mut T, ListError> {
        self.value_at_mut(self.current)
    }

    /// Moves the cursor to the first value, or onto the tail if empty.
    #[inline]
    pub fn begin(&mut self) {
        self.current = self.first_addr();
    }

    /// Moves the cursor to the last value, or onto the head if empty.
    #[inline]
    pub fn end(&mut self) {
        self.current = self.last_addr();
    }

    /// Steps toward the tail, but never onto it.
    pub fn forward(&mut self) {
        if self.current == TAIL_ADDR {
            return;
        }
        let next = self.mem.get(self.current).next();
        if next != TAIL_ADDR {
            self.current = next;
        }
    }

    /// Steps toward the head. Does nothing on the first value or on the head
    /// itself.
    pub fn backward(&mut self) {
        if self.current == HEAD_ADDR || self.current == self.first_addr() {
            return;
        }
        self.current = self.mem.get(self.current).prev();
    }

    #[inline]
    pub fn at_front(&self) -> bool {
        !self.is_empty() && self.current == self.first_addr()
    }

    #[inline]
    pub fn at_back(&self) -> bool {
        !self.is_empty() && self.current == self.last_addr()
    }

    /// Moves the cursor to the first node holding `target`. The cursor stays
    /// put when nothing matches.
    pub fn search(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self
            .addrs()
            .find(|&addr| self.mem.get(addr).data() == Some(target));
        match found {
            Some(addr) => {
                self.current = addr;
                true
            }
            None => false,
        }
    }

    pub fn collect(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut buf = Vec::with_capacity(self.len);
        buf.extend(self.values().cloned());
        buf
    }
}
