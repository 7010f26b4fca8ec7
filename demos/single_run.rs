use colored::*;

use weave::qec_code::surface_code::SurfaceCodeSim;

fn main() {
    let distance = 3;
    let p = 0.12;
    let seed = 7;

    let mut code = SurfaceCodeSim::new(distance, p, "uncorrelated", true, seed)
        .expect("valid configuration");

    while !code.has_logical_error() {
        println!("--- round {} ---", code.rounds_survived() + 1);
        code.simulate_step();
    }

    println!(
        "{} after {} rounds",
        "logical error".red(),
        code.rounds_survived()
    );
}
