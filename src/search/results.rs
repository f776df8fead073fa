use std::time::Duration;
use crate::relation::{OrganizationMatch, TicketMatch, UserMatch};
use crate::search::query::SearchQuery;

/// Search results container
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub query: SearchQuery,
    pub hits: Hits<'a>,
    pub took: Duration,
}

impl<'a> SearchResults<'a> {
    pub fn total_hits(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Matched records of one type, each with its related records attached.
#[derive(Debug, Clone, PartialEq)]
pub enum Hits<'a> {
    Organizations(Vec<OrganizationMatch<'a>>),
    Users(Vec<UserMatch<'a>>),
    Tickets(Vec<TicketMatch<'a>>),
}

impl<'a> Hits<'a> {
    pub fn len(&self) -> usize {
        match self {
            Hits::Organizations(hits) => hits.len(),
            Hits::Users(hits) => hits.len(),
            Hits::Tickets(hits) => hits.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
