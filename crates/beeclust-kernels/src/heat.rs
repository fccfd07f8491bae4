//! The heatmap kernel: distance fields combined into temperatures.

use crate::distance::{distance_field, HeatSource};
use beeclust_core::{code, SimParams};
use beeclust_grid::{Grid, HeatMap};

/// Recompute every cell of `heatmap` from the current grid.
///
/// Runs one heater and one cooler [`distance_field`] pass, then writes per
/// cell:
///
/// - walls: `NAN`;
/// - heater cells: `t_heater`; cooler cells: `t_cooler`;
/// - everything else:
///   `t_env + k_temp * (max(0, heating) - max(0, cooling))` with
///   `heating = (t_heater - t_env) / d_heater` and
///   `cooling = (t_env - t_cooler) / d_cooler`.
///
/// Unreachable cells route through the same arithmetic: a distance of `-1`
/// makes the corresponding term negative, and the `max(0, ·)` clamp
/// discards it. With both sources unreachable the cell settles at `t_env`.
///
/// Two successive calls with an unchanged grid produce identical heatmaps.
/// The distance fields are scratch, dropped on return.
pub fn recalculate_heat(heatmap: &mut HeatMap, grid: &Grid, params: &SimParams) {
    debug_assert_eq!(heatmap.cell_count(), grid.cell_count(), "shape mismatch");

    let heater_dist = distance_field(grid, HeatSource::Heater);
    let cooler_dist = distance_field(grid, HeatSource::Cooler);

    let heating_span = params.t_heater - params.t_env;
    let cooling_span = params.t_env - params.t_cooler;

    let temps = heatmap.values_mut();
    for (rank, &cell) in grid.codes().iter().enumerate() {
        temps[rank] = if cell == code::WALL {
            f64::NAN
        } else if heater_dist[rank] == 0 {
            params.t_heater
        } else if cooler_dist[rank] == 0 {
            params.t_cooler
        } else {
            let heating = heating_span / heater_dist[rank] as f64;
            let cooling = cooling_span / cooler_dist[rank] as f64;
            params.t_env + params.k_temp * (heating.max(0.0) - cooling.max(0.0))
        };
    }
}
