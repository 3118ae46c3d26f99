pub mod session;
pub mod simulator;

pub use session::ChatSession;
pub use simulator::SimulatorService;
