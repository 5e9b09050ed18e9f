//! Hue ordering: arrange a catalog into a low-jump rotation cycle.
//!
//! The cycle is built by a greedy nearest-neighbor tour over the hue
//! wheel: start at the first catalog entry, then repeatedly step to the
//! closest hue not yet visited. Each step is locally optimal; the tour as
//! a whole is not guaranteed to be. [`refine_two_opt`] can tighten it
//! afterwards.
//!
//! Everything here is O(N²) in the catalog size, which is fine for a few
//! dozen themes.

use rotor_color::hue_distance;
use tracing::debug;

/// Anything with a position on the hue wheel.
pub trait Hued {
    /// Hue in degrees. Values outside `[0, 360)` are wrapped by the
    /// distance function.
    fn hue(&self) -> f64;
}

impl Hued for f64 {
    fn hue(&self) -> f64 {
        *self
    }
}

/// Reorder a catalog by color similarity.
///
/// - `None` or an empty slice yields an empty cycle.
/// - The first element of the result is always the first element of the
///   input.
/// - The input is only borrowed; a new `Vec` is returned.
/// - Ties are broken by the earliest catalog index.
///
/// # Examples
///
/// ```
/// use rotor_theme::order::sort_by_color_similarity;
///
/// let hues: [f64; 5] = [0.0, 240.0, 120.0, 30.0, 60.0];
/// let sorted = sort_by_color_similarity(&hues[..]);
/// assert_eq!(sorted, vec![0.0, 30.0, 60.0, 120.0, 240.0]);
/// ```
#[must_use]
pub fn sort_by_color_similarity<'a, T, C>(catalog: C) -> Vec<T>
where
    T: Hued + Clone + 'a,
    C: Into<Option<&'a [T]>>,
{
    let Some(catalog) = catalog.into() else {
        return Vec::new();
    };
    let hues: Vec<f64> = catalog.iter().map(Hued::hue).collect();
    nearest_neighbor_order(&hues)
        .into_iter()
        .map(|i| catalog[i].clone())
        .collect()
}

/// Greedy nearest-neighbor tour over `hues`, as indices into the input.
///
/// Always starts at index 0. Returns an empty `Vec` for empty input.
#[must_use]
pub fn nearest_neighbor_order(hues: &[f64]) -> Vec<usize> {
    let n = hues.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    order.push(0);
    visited[0] = true;

    let mut last = 0;
    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for (i, &h) in hues.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = hue_distance(hues[last], h);
            // Strict `<` keeps the earliest index on ties.
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        let Some((next, _)) = best else { break };
        visited[next] = true;
        order.push(next);
        last = next;
    }

    order
}

/// Sum of hue distances around the closed cycle, wrap-around edge included.
#[must_use]
pub fn tour_length<T: Hued>(cycle: &[T]) -> f64 {
    edges(cycle).sum()
}

/// The largest single hue jump in the closed cycle.
#[must_use]
pub fn max_step<T: Hued>(cycle: &[T]) -> f64 {
    edges(cycle).fold(0.0, f64::max)
}

fn edges<T: Hued>(cycle: &[T]) -> impl Iterator<Item = f64> + '_ {
    let n = cycle.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| hue_distance(cycle[i].hue(), cycle[(i + 1) % n].hue()))
}

/// Improvements smaller than this are treated as noise.
const EPSILON: f64 = 1e-9;

/// Tighten a closed cycle in place with 2-opt segment reversals.
///
/// The first element never moves. A reversal is applied only when it
/// shortens the closed tour, so [`tour_length`] never increases. Returns
/// the number of reversals performed.
pub fn refine_two_opt<T: Hued>(cycle: &mut [T]) -> usize {
    let n = cycle.len();
    if n < 4 {
        return 0;
    }

    let before = tour_length(cycle);
    let mut moves = 0;
    let mut improved = true;

    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in i + 1..n {
                let a = cycle[i - 1].hue();
                let b = cycle[i].hue();
                let c = cycle[j].hue();
                let d = cycle[(j + 1) % n].hue();

                let delta = hue_distance(a, c) + hue_distance(b, d)
                    - hue_distance(a, b)
                    - hue_distance(c, d);

                if delta < -EPSILON {
                    cycle[i..=j].reverse();
                    moves += 1;
                    improved = true;
                }
            }
        }
    }

    debug!(moves, before, after = tour_length(cycle), "2-opt refinement");
    moves
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
