pub mod collection;
pub mod organization;
pub mod user;
pub mod ticket;

pub use collection::Collection;
pub use organization::Organization;
pub use ticket::Ticket;
pub use user::User;

// Foreign-key fields shared by the relation resolver.
pub const ORGANIZATION_ID: &str = "organizationId";
pub const SUBMITTER_ID: &str = "submitterId";
pub const ASSIGNEE_ID: &str = "assigneeId";
