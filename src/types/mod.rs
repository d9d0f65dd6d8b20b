mod membership;
mod privacy;
mod team;

pub use membership::{MembershipRole, Role};
pub use privacy::Privacy;
pub use team::Team;
