pub mod mc_methods;
pub mod value_iteration;
