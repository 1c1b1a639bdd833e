//! The pheromone trail field: a dense grid of decaying concentrations
//! that agents deposit into and sense from.

use rayon::prelude::*;

/// Upper bound for a single cell's concentration.
pub const MAX_CONCENTRATION: f32 = 255.0;

/// Row-major concentration grid with double-buffered updates.
///
/// Three same-shaped buffers are allocated once: the current grid, the
/// next grid (swapped in at the end of every [`advance`](Self::advance)),
/// and the grid as it was before the most recent advance, kept so
/// renderers can detect cells that just faded out.
#[derive(Debug, Clone)]
pub struct TrailField {
    cells: Vec<f32>,
    next: Vec<f32>,
    prev: Vec<f32>,
    width: f64,
    height: f64,
    resolution: f64,
    cols: usize,
    rows: usize,
    diffusion_rate: f32,
    evaporation_rate: f32,
}

impl TrailField {
    pub fn new(
        width: f64,
        height: f64,
        resolution: f64,
        diffusion_rate: f32,
        evaporation_rate: f32,
    ) -> Self {
        let cols = ((width / resolution).floor() as usize).max(1);
        let rows = ((height / resolution).floor() as usize).max(1);
        let cells = vec![0.0; cols * rows];
        Self {
            next: cells.clone(),
            prev: cells.clone(),
            cells,
            width,
            height,
            resolution,
            cols,
            rows,
            diffusion_rate,
            evaporation_rate,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Current concentrations, row-major.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Concentrations as they were before the most recent `advance`.
    pub fn previous(&self) -> &[f32] {
        &self.prev
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Maps a world point to a cell index, or `None` outside the area.
    fn cell_at(&self, x: f64, y: f64) -> Option<usize> {
        if x < 0.0 || x >= self.width || y < 0.0 || y >= self.height {
            return None;
        }
        let cx = ((x / self.resolution) as usize).min(self.cols - 1);
        let cy = ((y / self.resolution) as usize).min(self.rows - 1);
        Some(self.index(cx, cy))
    }

    /// Adds `amount` at the cell containing the point, capped at
    /// [`MAX_CONCENTRATION`]. Silently ignores out-of-area points.
    pub fn deposit(&mut self, x: f64, y: f64, amount: f32) {
        if let Some(idx) = self.cell_at(x, y) {
            self.cells[idx] = (self.cells[idx] + amount).min(MAX_CONCENTRATION);
        }
    }

    /// Concentration at the cell containing the point; 0 outside the area.
    pub fn query(&self, x: f64, y: f64) -> f32 {
        self.cell_at(x, y).map_or(0.0, |idx| self.cells[idx])
    }

    /// Produces the next grid from the current one.
    ///
    /// Interior cells blend with the mean of their 8 neighbors at the
    /// diffusion rate, then evaporate. Border cells skip diffusion and
    /// only evaporate: no wraparound and no reflection, so trails fade
    /// toward the edges instead of accumulating there. The grid is
    /// replaced atomically by a buffer swap, and the computation reads
    /// only the previous grid, so rows shard cleanly across threads.
    pub fn advance(&mut self) {
        self.prev.copy_from_slice(&self.cells);

        let cols = self.cols;
        let rows = self.rows;
        let diffusion = self.diffusion_rate;
        let evaporation = self.evaporation_rate;
        let cells = &self.cells;

        self.next
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, out) in row.iter_mut().enumerate() {
                    let current = cells[y * cols + x];
                    let value = if x == 0 || y == 0 || x == cols - 1 || y == rows - 1 {
                        current
                    } else {
                        let mut sum = 0.0f32;
                        for ny in y - 1..=y + 1 {
                            for nx in x - 1..=x + 1 {
                                if nx != x || ny != y {
                                    sum += cells[ny * cols + nx];
                                }
                            }
                        }
                        current * (1.0 - diffusion) + (sum / 8.0) * diffusion
                    };
                    *out = (value * evaporation).clamp(0.0, MAX_CONCENTRATION);
                }
            });

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Sum over all cells; diffusion redistributes without creating mass,
    /// so this is non-increasing between deposits.
    pub fn total_concentration(&self) -> f64 {
        self.cells.iter().map(|&v| v as f64).sum()
    }

    /// Number of cells above `threshold`.
    pub fn active_cells(&self, threshold: f32) -> usize {
        self.cells.iter().filter(|&&v| v > threshold).count()
    }
}
