mod config_test;
mod session_test;
mod simulation_test;
