pub mod domain;
pub mod ports;
pub mod validate;

pub use domain::{
    ChallengeRef, CustomPlanSummary, NewStretch, NewWeek, Stretch, StretchUpdate, Week,
    WeekWithChallenge,
};
pub use ports::{
    BlobStore, CustomPlanStore, PortError, PortResult, SessionCheck, StretchStore, WeekStore,
};
pub use validate::{parse_id, require_name, ValidationError};
