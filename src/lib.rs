pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::System;
pub use simulation::params::{Parameters, SOFTENING};
pub use simulation::forces::pairwise_accelerations;
pub use simulation::integrator::{simulate_n_body, center_of_mass_frame};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_kernel, bench_simulate};
