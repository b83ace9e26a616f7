use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;

/// Heap ordering: `before(a, b)` means `a` has to sit nearer the root than `b`.
///
/// Implemented for every `Fn(&T, &T) -> bool`. Closures need annotated parameter types
/// (`|a: &u32, b: &u32| a < b`) so that they accept any pair of borrows.
///
/// The predicate is trusted. If it isn't consistent the heap stays memory safe but its order
/// is unspecified.
pub trait Before<T> {
    fn before(&self, a: &T, b: &T) -> bool;
}

impl<T, F: Fn(&T, &T) -> bool> Before<T> for F {
    #[inline]
    fn before(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Largest element first.
#[derive(Clone, Copy, Default, Debug)]
pub struct Greater;

impl<T: Ord> Before<T> for Greater {
    #[inline]
    fn before(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element first.
#[derive(Clone, Copy, Default, Debug)]
pub struct Less;

impl<T: Ord> Before<T> for Less {
    #[inline]
    fn before(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Flips the wrapped ordering.
#[derive(Clone, Copy, Default, Debug)]
pub struct Reversed<B>(pub B);

impl<T, B: Before<T>> Before<T> for Reversed<B> {
    #[inline]
    fn before(&self, a: &T, b: &T) -> bool {
        self.0.before(b, a)
    }
}

pub type MaxHeap<T> = Heap<T, Greater>;
pub type MinHeap<T> = Heap<T, Less>;

/// O(log n)
pub(crate) fn sift_up<T, F: Before<T>>(data: &mut [T], mut node: usize, before: &F) {
    while node != 0 {
        let parent = (node - 1) / 2;

        if before.before(&data[node], &data[parent]) {
            data.swap(parent, node);
            node = parent;
        } else {
            break;
        }
    }
}

/// Expects both subtrees of `node` to be heaps already. Equal children resolve to the left one.
///
/// O(log n)
pub(crate) fn sift_down<T, F: Before<T>>(data: &mut [T], mut node: usize, before: &F) {
    let len = data.len();
    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        if len <= left {
            break;
        }

        let child = if right < len && before.before(&data[right], &data[left]) {
            right
        } else {
            left
        };

        if before.before(&data[child], &data[node]) {
            data.swap(node, child);
            node = child;
        } else {
            break;
        }
    }
}

/// Rearranges `data` into a heap under `before`, bottom-up and without allocating.
///
/// O(n)
pub fn heapify<T, F: Before<T>>(data: &mut [T], before: F) {
    heapify_by(data, &before);
}

pub(crate) fn heapify_by<T, F: Before<T>>(data: &mut [T], before: &F) {
    for i in (0..data.len() / 2).rev() {
        sift_down(data, i, before);
    }
}

/// Checks that no element comes strictly before its parent.
///
/// O(n)
pub fn is_heap<T, F: Before<T>>(data: &[T], before: F) -> bool {
    (1..data.len()).all(|child| !before.before(&data[child], &data[(child - 1) / 2]))
}

/// A binary heap over any ordering predicate.
///
/// `S` is the backing storage. It is `Vec<T>` for heaps that own their elements
/// (`new`, `from_slice`, `from_vec`) and `&mut Vec<T>` for [`Heap::in_place`], which works
/// directly on the caller's vector.
#[derive(Clone)]
pub struct Heap<T, F, S = Vec<T>> {
    data: S,
    before: F,
    marker: PhantomData<T>,
}

impl<T, F: Before<T>> Heap<T, F> {
    /// O(1)
    #[inline]
    pub fn new(before: F) -> Self {
        Self::with_capacity(0, before)
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize, before: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            before,
            marker: PhantomData,
        }
    }

    /// Copies `elems` into new storage; the caller's slice is left as it was.
    ///
    /// O(n)
    pub fn from_slice(elems: &[T], before: F) -> Self
    where
        T: Clone,
    {
        Self::from_vec(elems.to_vec(), before)
    }

    /// Takes `data` as the backing storage without copying it.
    ///
    /// O(n)
    pub fn from_vec(mut data: Vec<T>, before: F) -> Self {
        heapify_by(&mut data, &before);
        Self {
            data,
            before,
            marker: PhantomData,
        }
    }

    /// O(n)
    pub fn from_iter_with<Iter: IntoIterator<Item = T>>(iter: Iter, before: F) -> Self {
        Self::from_vec(iter.into_iter().collect(), before)
    }

    /// Elements in extraction order, root first.
    ///
    /// O(n log n)
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self {
            mut data, before, ..
        } = self;

        let mut end = data.len();
        while 1 < end {
            end -= 1;
            data.swap(0, end);
            sift_down(&mut data[..end], 0, &before);
        }
        data.reverse();

        data
    }

    /// O(1)
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<'a, T, F: Before<T>> Heap<T, F, &'a mut Vec<T>> {
    /// Heapifies `data` in place and keeps operating on it.
    ///
    /// Once the heap is dropped the caller's vector holds whatever the heap left behind,
    /// including pushed elements and minus popped ones.
    ///
    /// O(n)
    pub fn in_place(data: &'a mut Vec<T>, before: F) -> Self {
        heapify_by(data, &before);
        Self {
            data,
            before,
            marker: PhantomData,
        }
    }
}

impl<T, F: Before<T>, S: BorrowMut<Vec<T>>> Heap<T, F, S> {
    #[inline]
    fn vec(&self) -> &Vec<T> {
        self.data.borrow()
    }

    #[inline]
    fn vec_mut(&mut self) -> &mut Vec<T> {
        self.data.borrow_mut()
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.vec().len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec().is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.vec().capacity()
    }

    /// O(1)
    pub fn reserve(&mut self, additional: usize) {
        self.vec_mut().reserve(additional);
    }

    /// The backing storage in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.vec()
    }

    /// Iterates in heap order, not in extraction order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec().iter()
    }

    #[inline]
    pub fn ordering(&self) -> &F {
        &self.before
    }

    /// O(1)
    #[inline]
    pub fn try_peek(&self) -> Option<&T> {
        self.vec().first()
    }

    /// # Panics
    /// If the heap is empty.
    ///
    /// O(1)
    #[inline]
    pub fn peek(&self) -> &T {
        match self.try_peek() {
            Some(root) => root,
            None => panic!("heap is empty"),
        }
    }

    /// O(log n)
    pub fn push(&mut self, value: T) {
        let data: &mut Vec<T> = self.data.borrow_mut();
        data.push(value);
        let last = data.len() - 1;
        sift_up(data, last, &self.before);
    }

    /// O(log n)
    pub fn try_pop(&mut self) -> Option<T> {
        let data: &mut Vec<T> = self.data.borrow_mut();

        let mut res = data.pop()?;
        if let Some(root) = data.first_mut() {
            res = mem::replace(root, res);
            sift_down(data, 0, &self.before);
        }

        Some(res)
    }

    /// # Panics
    /// If the heap is empty.
    ///
    /// O(log n)
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(root) => root,
            None => panic!("heap is empty"),
        }
    }

    /// O(n)
    pub fn clear(&mut self) {
        self.vec_mut().clear();
    }

    /// O(1)
    #[inline]
    pub fn into_inner(self) -> S {
        self.data
    }
}

impl<T, F: Before<T> + Default> Default for Heap<T, F> {
    #[inline]
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<T: Ord> MaxHeap<T> {
    #[inline]
    pub fn max_heap() -> Self {
        Self::new(Greater)
    }
}

impl<T: Ord> MinHeap<T> {
    #[inline]
    pub fn min_heap() -> Self {
        Self::new(Less)
    }
}

impl<T: fmt::Debug, F, S: Borrow<Vec<T>>> fmt::Debug for Heap<T, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data: &Vec<T> = self.data.borrow();
        f.debug_list().entries(data.iter()).finish()
    }
}

impl<T, F: Before<T> + Default> FromIterator<T> for Heap<T, F> {
    /// O(n)
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        Self::from_iter_with(iter, F::default())
    }
}

impl<T, F: Before<T>, S: BorrowMut<Vec<T>>> Extend<T> for Heap<T, F, S> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        // Heapify costs about 2 * len comparisons, sifting each new element up costs about
        // log2(old_len) apiece.
        fn better_to_rebuild(old_len: usize, added: usize) -> bool {
            if old_len == 0 {
                return true;
            }
            let log2 = 8 * mem::size_of::<usize>() - old_len.leading_zeros() as usize - 1;
            2 * (old_len + added) < added * log2
        }

        let data: &mut Vec<T> = self.data.borrow_mut();
        let old_len = data.len();
        data.extend(iter);

        if better_to_rebuild(old_len, data.len() - old_len) {
            heapify_by(data, &self.before);
        } else {
            for i in old_len..data.len() {
                sift_up(data, i, &self.before);
            }
        }
    }
}
