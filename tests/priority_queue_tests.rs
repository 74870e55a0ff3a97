use decrease_key_sssp::{DecreaseKeyQueue, Error, FibonacciHeap, IndexedBinaryHeap, VertexId};

fn drain<Q: DecreaseKeyQueue<f64, VertexId>>(queue: &mut Q) -> Vec<(VertexId, f64)> {
    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.extract_min().unwrap());
    }
    drained
}

// Mirrors how Dijkstra drives a queue: everything starts at infinity but the source
fn dijkstra_like_workload<Q: DecreaseKeyQueue<f64, VertexId> + Default>() -> Vec<(VertexId, f64)> {
    let mut queue = Q::default();
    for v in 0..8 {
        let key = if v == 0 { 0.0 } else { f64::INFINITY };
        queue.insert(key, VertexId(v)).unwrap();
    }

    let (first, key) = queue.extract_min().unwrap();
    assert_eq!((first, key), (VertexId(0), 0.0));

    queue.decrease_key(&VertexId(5), 3.0).unwrap();
    queue.decrease_key(&VertexId(2), 7.0).unwrap();
    queue.decrease_key(&VertexId(7), 1.0).unwrap();
    queue.decrease_key(&VertexId(2), 2.0).unwrap();
    assert!(matches!(queue.decrease_key(&VertexId(0), 0.0), Err(Error::NoSuchElement)));

    drain(&mut queue)
}

#[test]
fn test_backends_agree_on_decrease_key_workload() {
    let fibonacci = dijkstra_like_workload::<FibonacciHeap<f64, VertexId>>();
    let binary = dijkstra_like_workload::<IndexedBinaryHeap<f64, VertexId>>();

    let finite: Vec<(VertexId, f64)> = fibonacci.iter().copied().filter(|(_, key)| key.is_finite()).collect();
    assert_eq!(
        finite,
        vec![(VertexId(7), 1.0), (VertexId(2), 2.0), (VertexId(5), 3.0)]
    );
    assert_eq!(fibonacci.len(), 7);
    // Equal keys leave in value order, so the whole drain matches
    assert_eq!(binary, fibonacci);
    assert_eq!(
        fibonacci[3..].iter().map(|(v, _)| *v).collect::<Vec<_>>(),
        vec![VertexId(1), VertexId(3), VertexId(4), VertexId(6)]
    );
}

#[test]
fn test_empty_queue_errors() {
    let mut fibonacci: FibonacciHeap<f64, VertexId> = FibonacciHeap::new();
    let mut binary: IndexedBinaryHeap<f64, VertexId> = IndexedBinaryHeap::new();

    assert!(matches!(fibonacci.extract_min(), Err(Error::EmptyQueue)));
    assert!(matches!(binary.extract_min(), Err(Error::EmptyQueue)));
    assert_eq!(fibonacci.peek_min(), None);
    assert_eq!(binary.peek_min(), None);
}
