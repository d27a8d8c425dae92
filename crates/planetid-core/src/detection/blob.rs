use ndarray::Array2;

use crate::config::MaskConfig;

/// The largest 4-connected foreground component found in a mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    /// Number of pixels in the component.
    pub area: usize,
    /// Tight bounding box in mask coordinates: (min_x, min_y, max_x, max_y),
    /// all inclusive.
    pub bbox: (usize, usize, usize, usize),
}

/// Find the largest 4-connected foreground component in the mask.
///
/// Seeds are scanned on a coarse stride (outer loop x ascending, inner loop
/// y ascending) to bound scan cost; each seed is grown by an exact flood
/// fill, so component membership and the bounding box are exact for any
/// component that has at least one pixel on the stride grid. Components that
/// miss the grid entirely are not found; this is an accepted resolution
/// limit, not a defect.
///
/// Equal-area components tie-break to the first one discovered in scan
/// order, which keeps results deterministic.
///
/// Returns `None` when the mask is entirely background.
pub fn largest_blob(mask: &Array2<bool>, config: &MaskConfig) -> Option<Blob> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return None;
    }

    let stride = config.seed_stride.max(1);
    let mut visited = Array2::from_elem((h, w), false);
    let mut best: Option<Blob> = None;

    // Explicit heap frontier: working-resolution components can cover the
    // whole grid, far past any safe recursion depth.
    let mut frontier: Vec<(usize, usize)> = Vec::new();

    for x in (0..w).step_by(stride) {
        for y in (0..h).step_by(stride) {
            if !mask[[y, x]] || visited[[y, x]] {
                continue;
            }

            let mut area = 0usize;
            let (mut min_x, mut max_x, mut min_y, mut max_y) = (x, x, y, y);

            visited[[y, x]] = true;
            frontier.push((x, y));

            while let Some((cx, cy)) = frontier.pop() {
                area += 1;
                min_x = min_x.min(cx);
                max_x = max_x.max(cx);
                min_y = min_y.min(cy);
                max_y = max_y.max(cy);

                for (nx, ny) in neighbors4(cx, cy, w, h) {
                    if mask[[ny, nx]] && !visited[[ny, nx]] {
                        visited[[ny, nx]] = true;
                        frontier.push((nx, ny));
                    }
                }
            }

            if best.as_ref().map_or(true, |b| area > b.area) {
                best = Some(Blob {
                    area,
                    bbox: (min_x, min_y, max_x, max_y),
                });
            }
        }
    }

    if let Some(ref blob) = best {
        tracing::debug!(area = blob.area, bbox = ?blob.bbox, "largest blob");
    } else {
        tracing::debug!("mask is entirely background, no blob");
    }

    best
}

/// 4-connected in-bounds neighbors of `(x, y)`.
fn neighbors4(
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        (x.wrapping_sub(1), y),
        (x + 1, y),
        (x, y.wrapping_sub(1)),
        (x, y + 1),
    ];
    candidates.into_iter().filter(move |&(nx, ny)| nx < w && ny < h)
}
