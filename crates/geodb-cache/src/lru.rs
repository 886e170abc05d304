use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use geodb_core::error::{Error, Result};

struct Slot<K, V> {
    entry: Option<(K, V)>,
    prev: Option<usize>,
    next: Option<usize>,
}

pub struct LruCache<K, V> {
    capacity: usize,
    index: HashMap<K, usize>,
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    /// Least recently used.
    head: Option<usize>,
    /// Most recently used.
    tail: Option<usize>,
}

impl<K, V> LruCache<K, V> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Entries from least to most recently used. Does not promote.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, next: self.head, remaining: self.index.len() }
    }

    fn unlink(&mut self, i: usize) {
        let (prev, next) = (self.slots[i].prev, self.slots[i].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.slots[i].prev = None;
        self.slots[i].next = None;
    }

    fn push_back(&mut self, i: usize) {
        self.slots[i].prev = self.tail;
        self.slots[i].next = None;
        match self.tail {
            Some(t) => self.slots[t].next = Some(i),
            None => self.head = Some(i),
        }
        self.tail = Some(i);
    }

    fn promote(&mut self, i: usize) {
        if self.tail != Some(i) {
            self.unlink(i);
            self.push_back(i);
        }
    }

    fn alloc(&mut self, entry: (K, V)) -> usize {
        let slot = Slot { entry: Some(entry), prev: None, next: None };
        if let Some(i) = self.free.pop() {
            self.slots[i] = slot;
            i
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    fn release(&mut self, i: usize) -> Option<(K, V)> {
        self.unlink(i);
        self.free.push(i);
        self.slots[i].entry.take()
    }
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Fails with [`Error::InvalidConfig`] for a zero capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfig("LRU capacity must be at least 1".to_string()));
        }
        Ok(Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
        })
    }

    /// Look up `key` and mark it most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = *self.index.get(key).ok_or(Error::CacheMiss)?;
        self.promote(i);
        self.slots[i].entry.as_ref().map(|(_, v)| v).ok_or(Error::CacheMiss)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = *self.index.get(key).ok_or(Error::CacheMiss)?;
        self.promote(i);
        self.slots[i].entry.as_mut().map(|(_, v)| v).ok_or(Error::CacheMiss)
    }

    /// [`get`](Self::get) with a fallback for misses.
    pub fn get_or<Q>(&mut self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).map_or(default, Clone::clone)
    }

    /// Look up `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = *self.index.get(key)?;
        self.slots[i].entry.as_ref().map(|(_, v)| v)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Insert or replace `key` as the most recently used entry.
    ///
    /// Replacing never evicts. Inserting a new key into a full cache first
    /// evicts the least recently used entry, which is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&i) = self.index.get(&key) {
            if let Some(entry) = self.slots[i].entry.as_mut() {
                entry.1 = value;
            }
            self.promote(i);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity { self.pop_oldest().ok() } else { None };
        if evicted.is_some() {
            tracing::trace!(capacity = self.capacity, "evicted least recently used entry");
        }
        let i = self.alloc((key.clone(), value));
        self.push_back(i);
        self.index.insert(key, i);
        evicted
    }

    /// Remove and return the least recently used entry.
    pub fn pop_oldest(&mut self) -> Result<(K, V)> {
        let i = self.head.ok_or(Error::CacheEmpty)?;
        let (key, value) = self.release(i).ok_or(Error::CacheEmpty)?;
        self.index.remove(&key);
        Ok((key, value))
    }

    /// Remove `key`. Absent keys are a no-op returning `None`.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.index.remove(key)?;
        self.release(i).map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for LruCache<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over a cache from least to most recently used.
pub struct Iter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        let slot = &slots[self.next?];
        self.next = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.entry.as_ref().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
