//! Initial control-grid seeding for surface editors.

use std::f64::consts::PI;

use sculpt_core::{Result, SculptError};
use sculpt_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::net::ControlNet;

/// World-space length of seeded tangent handles.
pub const HANDLE_LENGTH: f64 = 1.5;

/// Parameters for seeding an initial control grid over a rectangular
/// parameter area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridParams {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Amplitude of the sinusoidal height field the grid samples.
    pub z_amp: f64,
    /// Grid columns (along X), at least 2.
    pub columns: usize,
    /// Grid rows (along Y), at least 2.
    pub rows: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 3.0 * PI,
            y_min: 0.0,
            y_max: 3.0 * PI,
            z_amp: 1.5,
            columns: 4,
            rows: 2,
        }
    }
}

impl GridParams {
    /// Baseline viewing distance for a camera framing this grid: half the
    /// area diagonal combined with the height amplitude.
    pub fn baseline_distance(&self) -> f64 {
        let hx = (self.x_max - self.x_min) / 2.0;
        let hy = (self.y_max - self.y_min) / 2.0;
        (hx * hx + hy * hy + self.z_amp * self.z_amp).sqrt()
    }

    /// Index of the point at `(column, row)` in a net seeded from these
    /// parameters.
    pub fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    fn midpoint(&self) -> (f64, f64) {
        (
            self.x_min + (self.x_max - self.x_min) / 2.0,
            self.y_min + (self.y_max - self.y_min) / 2.0,
        )
    }
}

/// Seed a `columns x rows` net sampled from `z = z_amp * sin(x) * sin(y)`
/// centered on the area midpoint. The first and last columns carry tangent
/// handles along X from the forward/backward difference, the
/// boundary-condition derivatives of a ruled or sectorial surface editor.
///
/// Points are stored column-major: `index = column * rows + row`.
pub fn seed_grid(params: &GridParams) -> Result<ControlNet> {
    if params.columns < 2 || params.rows < 2 {
        return Err(SculptError::Grid(format!(
            "control grid needs at least 2x2 points, got {}x{}",
            params.columns, params.rows
        )));
    }

    let (x_mid, y_mid) = params.midpoint();
    let mut net = ControlNet::new();

    for i in 0..params.columns {
        for j in 0..params.rows {
            let x = params.x_min
                + i as f64 * (params.x_max - params.x_min) / (params.columns - 1) as f64
                - x_mid;
            let y = params.y_min
                + j as f64 * (params.y_max - params.y_min) / (params.rows - 1) as f64
                - y_mid;
            let z = params.z_amp * x.sin() * y.sin();
            net.add_point(Point3::new(x, y, z));
        }
    }

    for j in 0..params.rows {
        let first = params.index(0, j);
        let second = params.index(1, j);
        let before_last = params.index(params.columns - 2, j);
        let last = params.index(params.columns - 1, j);

        let forward = net.points()[second].position - net.points()[first].position;
        add_boundary_handle(&mut net, first, forward);

        let backward = net.points()[last].position - net.points()[before_last].position;
        add_boundary_handle(&mut net, last, backward);
    }

    Ok(net)
}

fn add_boundary_handle(net: &mut ControlNet, point: usize, direction: Vector3) {
    let position = net.points()[point].position;
    let tip = match direction.try_normalize() {
        Some(dir) => position + dir * HANDLE_LENGTH,
        // Coincident neighbors: park the handle on its point
        None => position,
    };
    net.add_handle(point, tip);
}
