use indicatif::ProgressBar;

use weave::qec_code::surface_code::SurfaceCodeSim;

fn main() {
    let num_trials: u64 = 200;
    let distances = [3, 5, 7];
    let probabilities = [0.10, 0.12, 0.14, 0.16, 0.18, 0.20];
    let error_mode = "depolarizing";

    let sweep_len = distances.len() * probabilities.len();
    let mut count = 1;

    let mut result = vec![Vec::new(); distances.len()];

    for (&d, r) in distances.iter().zip(result.iter_mut()) {
        for &p in probabilities.iter() {
            println!("Progress {}/{}", count, sweep_len);
            count += 1;

            // a pair that cannot be constructed is skipped, not averaged
            if let Err(e) = SurfaceCodeSim::new(d, p, error_mode, false, 0) {
                eprintln!("skipping (d={}, p={}): {}", d, p, e);
                continue;
            }

            let bar = ProgressBar::new(num_trials);
            let mut total_rounds = 0;

            for trial in 0..num_trials {
                let mut code = SurfaceCodeSim::new(d, p, error_mode, false, trial)
                    .expect("configuration already validated");

                total_rounds += code.simulate();
                bar.inc(1);
            }

            r.push((p, total_rounds as f64 / num_trials as f64));

            bar.finish();
        }
    }

    for (&d, r) in distances.iter().zip(result.iter()) {
        println!("distance {}", d);
        for &(p, mean_rounds) in r.iter() {
            println!("  p = {:.2}: {:.2} rounds survived on average", p, mean_rounds);
        }
    }
}
