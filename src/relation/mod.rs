pub mod resolver;

pub use resolver::{
    related_to_organizations, related_to_tickets, related_to_users, OrganizationMatch, TicketMatch, UserMatch,
};
