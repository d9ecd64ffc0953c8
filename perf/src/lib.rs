use basalt_fifo::Fifo;

/// Deterministic pseudo-random sample values shared by the benches.
pub fn sample_values(count: usize) -> Vec<u32> {
    (0..count as u32)
        .map(|i| i.wrapping_mul(2_654_435_761))
        .collect()
}

/// Fills `fifo` with `count` sample values.
///
/// Panics if the buffer runs out of room; callers size the batch to the
/// remaining capacity.
pub fn fill(fifo: &mut Fifo, count: usize) {
    for v in sample_values(count) {
        fifo.push(v).expect("fifo unexpectedly full");
    }
}
