mod options;

use anyhow::Error as AnyErr;
use clap::Parser;
use materials::Material;
use options::Cli;
use rayon::prelude::*;
use units::linspace;
use waveguide::Geometry;

// Example for a concrete duct swept across 1-10 GHz.
// ```
// cargo run --example sweep -- --material concrete --a 0.3 --b 0.15 --start 1e9 --stop 10e9
// ```
fn main() -> Result<(), AnyErr> {
    let cli = Cli::parse();
    let guide = Geometry::new(cli.a, cli.b)?;
    let material = Material::from_name(&cli.material, None)?;

    let sweep: Vec<f64> = linspace(cli.start, cli.stop, cli.steps).collect();
    let rows = sweep
        .par_iter()
        .map(|&f_hz| {
            let fill = material.permittivity(f_hz)?;
            let prop = guide.propagation(fill, f_hz)?;
            Ok((f_hz, prop))
        })
        .collect::<Result<Vec<_>, AnyErr>>()?;

    println!("freq_hz,cutoff_hz,alpha_np_per_m,beta_rad_per_m,atten_db_per_m");
    for (f_hz, prop) in rows {
        println!(
            "{f_hz},{},{},{},{}",
            prop.cutoff_hz,
            prop.alpha_np_per_m,
            prop.beta_rad_per_m,
            prop.attenuation_db_per_m()
        );
    }

    Ok(())
}
