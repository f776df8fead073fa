use std::time::Instant;
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::DatabaseStats;
use crate::core::types::EntityKind;
use crate::index::IndexedCollection;
use crate::model::{Collection, Organization, Ticket, User};
use crate::relation;
use crate::search::query::SearchQuery;
use crate::search::results::{Hits, SearchResults};
use crate::storage::layout::DataLayout;
use crate::storage::loader;

/// All three collections, indexed together from one load.
#[derive(Debug)]
pub struct Database {
    organizations: IndexedCollection<Organization>,
    users: IndexedCollection<User>,
    tickets: IndexedCollection<Ticket>,
    loaded_at: DateTime<Utc>,
}

impl Database {
    /// Load the data files named by `config` and index them.
    pub fn open(config: &Config) -> Result<Self> {
        let layout = DataLayout::from_config(config);
        info!(data_dir = %layout.base_dir.display(), "opening database");

        let collections = loader::load_all(&layout)?;
        Ok(Self::from_collections(
            collections.organizations,
            collections.users,
            collections.tickets,
        ))
    }

    pub fn from_collections(
        organizations: Collection<Organization>,
        users: Collection<User>,
        tickets: Collection<Ticket>,
    ) -> Self {
        Database {
            organizations: IndexedCollection::new(organizations),
            users: IndexedCollection::new(users),
            tickets: IndexedCollection::new(tickets),
            loaded_at: Utc::now(),
        }
    }

    /// Run one exact-match query and attach related records to every hit.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResults<'_>> {
        query.validate()?;
        let start = Instant::now();

        let hits = match query.kind {
            EntityKind::Organization => {
                let matches = self.organizations.find(&query.field, &query.value)?;
                Hits::Organizations(relation::related_to_organizations(&matches, &self.users, &self.tickets)?)
            }
            EntityKind::User => {
                let matches = self.users.find(&query.field, &query.value)?;
                Hits::Users(relation::related_to_users(&matches, &self.organizations, &self.tickets)?)
            }
            EntityKind::Ticket => {
                let matches = self.tickets.find(&query.field, &query.value)?;
                Hits::Tickets(relation::related_to_tickets(&matches, &self.organizations, &self.users)?)
            }
        };

        let took = start.elapsed();
        debug!(query = %query, hits = hits.len(), took_us = took.as_micros() as u64, "query executed");
        Ok(SearchResults {
            query: query.clone(),
            hits,
            took,
        })
    }

    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            loaded_at: self.loaded_at,
            indexes: vec![
                self.organizations.index().stats().clone(),
                self.users.index().stats().clone(),
                self.tickets.index().stats().clone(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::types::{RecordId, NULL_OR_EMPTY};

    fn database() -> Database {
        let mut enthaze = Organization::new("101");
        enthaze.name = Some("Enthaze".to_string());
        let bare = Organization::new("102");

        let mut francisca = User::new("1");
        francisca.name = Some("Francisca Rasmussen".to_string());
        francisca.organization_id = Some(RecordId::from("101"));

        let mut korea = Ticket::new("436bf9b0-1147-4c0a-8439-6f79833bff5b");
        korea.subject = Some("A Catastrophe in Korea (North)".to_string());
        korea.organization_id = Some(RecordId::from("101"));
        korea.submitter_id = Some(RecordId::from("1"));

        Database::from_collections(
            vec![enthaze, bare].into_iter().collect(),
            vec![francisca].into_iter().collect(),
            vec![korea].into_iter().collect(),
        )
    }

    #[test]
    fn test_search_attaches_relations() {
        let db = database();
        let results = db.search(&SearchQuery::new(EntityKind::Organization, "name", "Enthaze")).unwrap();

        match &results.hits {
            Hits::Organizations(hits) => {
                assert_eq!(hits.len(), 1);
                assert_eq!(hits[0].users.len(), 1);
                assert_eq!(hits[0].tickets.len(), 1);
            }
            other => panic!("unexpected hits: {other:?}"),
        }
    }

    #[test]
    fn test_search_for_empty_field() {
        let db = database();
        let results = db.search(&SearchQuery::new(EntityKind::Organization, "name", NULL_OR_EMPTY)).unwrap();
        assert_eq!(results.total_hits(), 1);
    }

    #[test]
    fn test_search_without_hits() {
        let db = database();
        let results = db.search(&SearchQuery::new(EntityKind::User, "name", "Nobody")).unwrap();
        assert!(results.is_empty());
        assert_eq!(results.hits, Hits::Users(vec![]));
    }

    #[test]
    fn test_search_unknown_field() {
        let db = database();
        let err = db.search(&SearchQuery::new(EntityKind::Ticket, "alias", "x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownField);
    }

    #[test]
    fn test_stats() {
        let stats = database().stats();
        assert_eq!(stats.total_records(), 4);
        assert_eq!(stats.for_kind(EntityKind::Organization).map(|s| s.records), Some(2));
    }
}
