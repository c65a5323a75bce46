//! Prints the three region paths for every cell of the 3×3 exploration grid
//! (`W = 100`, rows `Ri = 180, 220, 260`, columns `G = 0.2, 0.3, 0.35`).
//!
//! Run with `RUST_LOG=debug` to see which diagonal root each cell picks.

use ringlogo::grid::ParameterGrid;

fn main() {
    env_logger::init();

    let grid = ParameterGrid::from_axes(100.0, &[180.0, 220.0, 260.0], &[0.2, 0.3, 0.35]);

    for cell in grid.evaluate() {
        let spec = cell.spec;
        println!(
            "# row {} col {}: W={} Ri={} G={}",
            spec.row, spec.col, spec.width, spec.inner_radius, spec.gap
        );
        match &cell.result {
            Ok(logo) => {
                println!(
                    "#   diagonal y = {:.6}x ± {:.6} ({:.1}°)",
                    logo.diagonal.slope,
                    logo.diagonal.intercept,
                    logo.diagonal.angle_degrees()
                );
                for (region, data) in logo.path_data() {
                    println!("{region:>6} {} {data}", region.fill());
                }
            },
            Err(err) => println!("#   skipped: {err}"),
        }
    }
}
