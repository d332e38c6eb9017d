//! Vote casting state machine and tally engine

pub mod booth;
pub mod registry;
pub mod reset;
pub mod session;
pub mod tally;
pub mod validator;

pub use booth::{SharedBooth, VotingBooth};
pub use registry::CandidateRegistry;
pub use reset::SessionResetController;
pub use session::VoteSession;
pub use tally::TallyEngine;
pub use validator::{VoterInputValidator, validate_identity};
