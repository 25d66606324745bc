pub mod mdp;
pub mod mdp_simulator;
pub mod mdp_solver_policy;
pub mod route_adapter;
pub mod solvers;
