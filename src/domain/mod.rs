pub mod countdown;
pub mod enums;
pub mod outcome;

pub use countdown::{minutes_to_millis, Countdown, CountdownEvent, MIN_DURATION_MS};
pub use enums::{Screen, SessionStatus};
pub use outcome::SessionOutcome;
