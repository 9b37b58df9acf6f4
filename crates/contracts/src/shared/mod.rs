pub mod hydra;
pub mod violations;
