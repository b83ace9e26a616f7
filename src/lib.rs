mod heap;
mod heap_sort;

pub use heap::{heapify, is_heap, Before, Greater, Heap, Less, MaxHeap, MinHeap, Reversed};
pub use heap_sort::{heap_sort, heap_sort_by_key};
