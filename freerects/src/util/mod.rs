/// Checks to verify the correctness of the state of the system
pub mod assertions;
