pub mod fibonacci_heap;
pub mod priority_queue;

pub use fibonacci_heap::FibonacciHeap;
pub use priority_queue::{DecreaseKeyQueue, IndexedBinaryHeap};
