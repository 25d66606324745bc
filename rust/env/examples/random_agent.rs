extern crate routegym;

use routegym::{logging, GraphSpec, ResetOptions, RouteConfig, RouteEnv, RouteGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(true);

    let config = RouteConfig {
        origin: Some(0),
        goal: Some(4),
        seed: 2718,
        ..RouteConfig::new(GraphSpec::undirected(
            5,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 3), (2, 4)],
        ))
    };
    let mut env = RouteEnv::new(&config)?;

    println!("observation space:\n{:?}\n", env.observation_space());
    println!("action space:\n{:?}\n", env.action_space());
    println!("adjacency:\n{}\n", env.graph().adjacency_matrix());
    println!("optimal:\n{:?}\n", env.get_optimal());

    for ep in 0..10 {
        env.reset(ResetOptions::default())?;
        let mut tot_reward = 0.;
        let mut steps = 0;
        loop {
            let action = env.action_space_sample();
            let si = env.step(action);
            tot_reward += si.reward;
            steps += 1;

            if si.done || steps == 100 {
                break;
            }
        }
        println!(
            "Finished episode {} after {} steps with total reward {}",
            ep, steps, tot_reward
        );
    }

    Ok(())
}
