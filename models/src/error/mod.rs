pub mod action_error;
pub mod model_error;
