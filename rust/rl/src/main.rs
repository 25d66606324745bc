mod mdps;

use clap::Parser;
use mdps::{
    mdp::*, mdp_simulator::*, mdp_solver_policy::*, route_adapter::*, solvers::mc_methods::*,
    solvers::value_iteration::*,
};
use routegym::{
    Continous, Policy, RandomPolicy, ResetOptions, RouteConfig, RouteEnv, RouteGraph,
    RouteObjective,
};
use std::error::Error;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(version, about = "Solve a route finding MDP and roll out its greedy policy")]
struct Args {
    /// JSON route configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Overrides the objective in the configuration: shortest or longest.
    #[arg(long, value_parser = parse_objective)]
    objective: Option<RouteObjective>,

    #[arg(long, default_value_t = 0.9)]
    gamma: Continous,

    #[arg(long, default_value_t = 1e-8)]
    theta: Continous,

    /// Random-policy episodes used for the Monte Carlo baseline.
    #[arg(long, default_value_t = 100)]
    episodes: usize,

    #[arg(long, default_value_t = 50)]
    max_steps: usize,

    /// Counts every visit to a state in the Monte Carlo baseline, not just the first.
    #[arg(long)]
    every_visit: bool,

    #[arg(long)]
    no_color: bool,
}

fn parse_objective(s: &str) -> Result<RouteObjective, String> {
    serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
        .map_err(|_| format!("unknown objective '{s}', expected shortest or longest"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    routegym::logging::init(!args.no_color);

    let mut config = RouteConfig::from_file(&args.config)?;
    if let Some(objective) = args.objective {
        config.objective = objective;
    }

    let mut env = RouteEnv::new(&config)?;
    let (origin, goal) = env.observation();
    println!(
        "{} nodes, origin {origin}, goal {goal}, objective {:?}",
        env.graph().n_nodes(),
        env.objective()
    );

    let mdp = Rc::new(RouteAdapter::from_env(&env, args.gamma)) as Rc<dyn Mdp>;
    let vi = &mut ValueIteration::new(Rc::clone(&mdp), 0.);
    let ret = vi.exec(args.theta, None);
    println!(
        "Theta: {}, Value stable: {}, Number of iterations: {}",
        args.theta, ret.0, ret.1
    );

    println!("{:?}", vi.v());
    let pi_star = (0..mdp.n_s()).map(|s| vi.pi_star(s)).collect::<Vec<_>>();
    println!("{pi_star:?}");

    let solver = Rc::new(vi.clone()) as Rc<dyn MdpSolver<bool>>;
    let policy = MdpSolverPolicy { mdp_solver: solver };

    let mut route = vec![env.reset(ResetOptions::default())?];
    let mut tot_reward = 0.;
    for _ in 0..args.max_steps {
        let si = env.step(policy.policy(&env.observation()));
        route.push(si.observation);
        tot_reward += si.reward;
        if si.done {
            break;
        }
    }

    let (optimal, cost) = env.get_optimal();
    println!("Greedy route {route:?} with total reward {tot_reward}");
    println!("Optimal route {optimal:?} with cost {cost}");

    let n_s = mdp.n_s();
    let random = Rc::new(RandomPolicy::new(env.action_space(), config.seed));
    let ep_gen: Rc<dyn EpisodeGenerator> =
        Rc::new(EpisodeGeneratorForEnv::new(env, random, args.max_steps));
    let (mc, visits) = if args.every_visit {
        (mc_every_visit as McEstimator, "every")
    } else {
        (mc_first_visit as McEstimator, "first")
    };
    let v_random = mc(ep_gen, args.gamma, n_s, args.episodes)?;
    println!("Random policy ({visits} visit MC): {v_random:?}");

    Ok(())
}
