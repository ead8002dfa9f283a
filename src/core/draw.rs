use crate::domain::model::Assignment;
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;

/// 拒絕採樣的嘗試上限，超過後改用確定性的環狀建構。
const MAX_SHUFFLE_ATTEMPTS: usize = 1000;

/// Draw a random assignment over `size` participants with nobody mapped to
/// themselves. Rejection sampling: shuffle the shifted sub-range `1..size`,
/// retry while any position holds its own index, then close the accepted
/// sequence into a ring through index 0.
pub fn generate_assignment<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Assignment> {
    if size < 2 {
        return Err(SantaError::DegenerateRosterError { size });
    }

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        let mut ring: Vec<usize> = (1..size).collect();
        ring.shuffle(rng);

        if has_shifted_fixed_point(&ring) {
            continue;
        }

        return Ok(assignment_from_ring(&ring, size));
    }

    tracing::warn!(
        "No accepted shuffle after {} attempts, falling back to cycle construction",
        MAX_SHUFFLE_ATTEMPTS
    );
    Ok(cycle_assignment(rng, size))
}

// 位移子範圍內的固定點：位置 i 的值等於 i 就整組重抽。
fn has_shifted_fixed_point(ring: &[usize]) -> bool {
    ring.iter().enumerate().any(|(i, &v)| v == i)
}

/// Pair every index with its circular successor in `[0, ring..., 0]`.
fn assignment_from_ring(ring: &[usize], size: usize) -> Assignment {
    let mut cycle = Vec::with_capacity(size + 1);
    cycle.push(0);
    cycle.extend_from_slice(ring);
    cycle.push(0);

    let mut targets = vec![0usize; size];
    for i in 0..size {
        targets[cycle[i]] = cycle[i + 1];
    }

    Assignment::new(targets)
}

/// Constructive fallback: shuffle the full index range once and map each
/// participant to its circular successor. A single N-cycle, so there is no
/// fixed point and no retry loop.
fn cycle_assignment<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Assignment {
    let mut order: Vec<usize> = (0..size).collect();
    order.shuffle(rng);

    let mut targets = vec![0usize; size];
    for i in 0..size {
        targets[order[i]] = order[(i + 1) % size];
    }

    Assignment::new(targets)
}
