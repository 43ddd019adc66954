use nbsim::{Scenario, ScenarioConfig};
use nbsim::{bench_kernel, bench_simulate};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Run the kernel/integrator benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_kernel();
        bench_simulate();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);
    let parameters = scenario.parameters.clone();

    let final_positions = scenario.run();

    println!(
        "ran {} leapfrog steps (dt = {}, G = {}) for {} particles",
        parameters.n_steps,
        parameters.dt,
        parameters.G,
        final_positions.nrows()
    );
    for (i, row) in final_positions.row_iter().enumerate() {
        println!("{i:5}: [{:12.6}, {:12.6}, {:12.6}]", row[0], row[1], row[2]);
    }

    Ok(())
}
