use std::collections::HashSet;
use tracing::debug;
use crate::core::error::Result;
use crate::core::types::{RecordId, NULL_OR_EMPTY};
use crate::index::IndexedCollection;
use crate::model::{Organization, Ticket, User, ASSIGNEE_ID, ORGANIZATION_ID, SUBMITTER_ID};
use crate::schema::schema::Record;

/// A matched organization with the users and tickets that belong to it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationMatch<'a> {
    pub organization: &'a Organization,
    pub users: Vec<&'a User>,
    pub tickets: Vec<&'a Ticket>,
}

/// A matched user with its organization and the tickets it submitted or
/// is assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMatch<'a> {
    pub user: &'a User,
    pub organization: Option<&'a Organization>,
    pub tickets: Vec<&'a Ticket>,
}

/// A matched ticket with its organization, submitter and assignee.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketMatch<'a> {
    pub ticket: &'a Ticket,
    pub organization: Option<&'a Organization>,
    pub users: Vec<&'a User>,
}

/// Users and tickets whose `organizationId` is the organization's id.
pub fn related_to_organizations<'a>(
    matches: &[&'a Organization],
    users: &'a IndexedCollection<User>,
    tickets: &'a IndexedCollection<Ticket>,
) -> Result<Vec<OrganizationMatch<'a>>> {
    matches
        .iter()
        .map(|&organization| {
            let id = organization.id.as_str();
            Ok(OrganizationMatch {
                organization,
                users: referencing(users, ORGANIZATION_ID, id)?,
                tickets: referencing(tickets, ORGANIZATION_ID, id)?,
            })
        })
        .collect()
}

/// The user's organization, then the tickets it submitted followed by the
/// tickets assigned to it, each ticket once.
pub fn related_to_users<'a>(
    matches: &[&'a User],
    organizations: &'a IndexedCollection<Organization>,
    tickets: &'a IndexedCollection<Ticket>,
) -> Result<Vec<UserMatch<'a>>> {
    matches
        .iter()
        .map(|&user| {
            let id = user.id.as_str();
            let submitted = referencing(tickets, SUBMITTER_ID, id)?;
            let assigned = referencing(tickets, ASSIGNEE_ID, id)?;
            Ok(UserMatch {
                user,
                organization: organization_of(user.organization_id.as_ref(), organizations),
                tickets: distinct(submitted.into_iter().chain(assigned), |t| &t.id),
            })
        })
        .collect()
}

/// The ticket's organization, then its submitter and assignee, each user
/// once. Users are looked up by id since the ticket holds them directly.
pub fn related_to_tickets<'a>(
    matches: &[&'a Ticket],
    organizations: &'a IndexedCollection<Organization>,
    users: &'a IndexedCollection<User>,
) -> Result<Vec<TicketMatch<'a>>> {
    Ok(matches
        .iter()
        .map(|&ticket| {
            let people = [ticket.submitter_id.as_ref(), ticket.assignee_id.as_ref()]
                .into_iter()
                .flatten()
                .filter_map(|id| {
                    let user = users.get(id.as_str());
                    if user.is_none() {
                        debug!(ticket = %ticket.id, user = %id, "dangling user reference");
                    }
                    user
                });
            TicketMatch {
                ticket,
                organization: organization_of(ticket.organization_id.as_ref(), organizations),
                users: distinct(people, |u| &u.id),
            }
        })
        .collect())
}

/// Records whose foreign key `field` holds `id`.
///
/// The sentinel bucket holds records with no reference at all, so an id
/// equal to the sentinel references nothing.
fn referencing<'a, R: Record>(collection: &'a IndexedCollection<R>, field: &str, id: &str) -> Result<Vec<&'a R>> {
    if id == NULL_OR_EMPTY {
        return Ok(Vec::new());
    }
    collection.find(field, id)
}

fn organization_of<'a>(
    id: Option<&RecordId>,
    organizations: &'a IndexedCollection<Organization>,
) -> Option<&'a Organization> {
    let id = id?;
    let organization = organizations.get(id.as_str());
    if organization.is_none() {
        debug!(organization = %id, "dangling organization reference");
    }
    organization
}

fn distinct<'a, T>(items: impl IntoIterator<Item = &'a T>, key: impl Fn(&'a T) -> &'a RecordId) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|&item| seen.insert(key(item))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Collection;

    fn org(id: &str) -> Organization {
        let mut org = Organization::new(id);
        org.name = Some(format!("Org {id}"));
        org
    }

    fn user(id: &str, org_id: Option<&str>) -> User {
        let mut user = User::new(id);
        user.organization_id = org_id.map(RecordId::from);
        user
    }

    fn ticket(id: &str, org_id: Option<&str>, submitter: Option<&str>, assignee: Option<&str>) -> Ticket {
        let mut ticket = Ticket::new(id);
        ticket.organization_id = org_id.map(RecordId::from);
        ticket.submitter_id = submitter.map(RecordId::from);
        ticket.assignee_id = assignee.map(RecordId::from);
        ticket
    }

    fn indexed<R: crate::schema::schema::Record>(records: Vec<R>) -> IndexedCollection<R> {
        IndexedCollection::new(records.into_iter().collect::<Collection<R>>())
    }

    fn ids<'a, R: crate::schema::schema::Record + 'a>(records: impl IntoIterator<Item = &'a R>) -> Vec<&'a str> {
        records.into_iter().map(|r| r.id().as_str()).collect()
    }

    #[test]
    fn test_organization_to_users_and_tickets() {
        let orgs = indexed(vec![org("101"), org("102")]);
        let users = indexed(vec![user("1", Some("101")), user("2", Some("102")), user("3", Some("101"))]);
        let tickets = indexed(vec![ticket("t1", Some("101"), None, None), ticket("t2", Some("102"), None, None)]);

        let matches = [orgs.get("101").unwrap()];
        let related = related_to_organizations(&matches, &users, &tickets).unwrap();

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].organization.id.as_str(), "101");
        assert_eq!(ids(related[0].users.iter().copied()), vec!["1", "3"]);
        assert_eq!(ids(related[0].tickets.iter().copied()), vec!["t1"]);
    }

    #[test]
    fn test_organization_without_members() {
        let orgs = indexed(vec![org("101")]);
        let users = indexed(Vec::<User>::new());
        let tickets = indexed(Vec::<Ticket>::new());

        let related = related_to_organizations(&[orgs.get("101").unwrap()], &users, &tickets).unwrap();
        assert!(related[0].users.is_empty());
        assert!(related[0].tickets.is_empty());
    }

    #[test]
    fn test_sentinel_id_relates_to_nothing() {
        let orgs = indexed(vec![org(NULL_OR_EMPTY)]);
        let users = indexed(vec![user(NULL_OR_EMPTY, None), user("2", None)]);
        let tickets = indexed(vec![ticket("t1", None, None, None)]);

        let related = related_to_organizations(&[orgs.get(NULL_OR_EMPTY).unwrap()], &users, &tickets).unwrap();
        assert!(related[0].users.is_empty());
        assert!(related[0].tickets.is_empty());

        let related = related_to_users(&[users.get(NULL_OR_EMPTY).unwrap()], &orgs, &tickets).unwrap();
        assert!(related[0].tickets.is_empty());
    }

    #[test]
    fn test_user_to_organization_and_tickets() {
        let orgs = indexed(vec![org("101")]);
        let users = indexed(vec![user("1", Some("101")), user("2", None)]);
        let tickets = indexed(vec![
            ticket("a", None, Some("2"), Some("1")),
            ticket("b", None, Some("1"), Some("1")),
            ticket("c", None, Some("1"), Some("2")),
            ticket("d", None, Some("2"), Some("2")),
        ]);

        let related = related_to_users(&[users.get("1").unwrap()], &orgs, &tickets).unwrap();

        assert_eq!(related[0].organization.map(|o| o.id.as_str()), Some("101"));
        // submitted first (b, c), then assigned (a; b already listed)
        assert_eq!(ids(related[0].tickets.iter().copied()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_user_without_organization() {
        let orgs = indexed(vec![org("101")]);
        let users = indexed(vec![user("1", None), user("2", Some("999"))]);
        let tickets = indexed(Vec::<Ticket>::new());

        let matches = [users.get("1").unwrap(), users.get("2").unwrap()];
        let related = related_to_users(&matches, &orgs, &tickets).unwrap();

        assert_eq!(related.len(), 2);
        assert!(related[0].organization.is_none());
        assert!(related[1].organization.is_none());
    }

    #[test]
    fn test_ticket_to_organization_and_users() {
        let orgs = indexed(vec![org("101")]);
        let users = indexed(vec![user("1", Some("101")), user("2", Some("101"))]);
        let tickets = indexed(vec![
            ticket("t1", Some("101"), Some("2"), Some("1")),
            ticket("t2", Some("999"), Some("1"), Some("1")),
            ticket("t3", None, Some("404"), None),
        ]);

        let matches: Vec<_> = ["t1", "t2", "t3"].iter().map(|id| tickets.get(id).unwrap()).collect();
        let related = related_to_tickets(&matches, &orgs, &users).unwrap();

        assert_eq!(related[0].organization.map(|o| o.id.as_str()), Some("101"));
        assert_eq!(ids(related[0].users.iter().copied()), vec!["2", "1"]);

        assert!(related[1].organization.is_none());
        assert_eq!(ids(related[1].users.iter().copied()), vec!["1"]);

        assert!(related[2].organization.is_none());
        assert!(related[2].users.is_empty());
    }

    #[test]
    fn test_output_follows_input_order() {
        let orgs = indexed(vec![org("101"), org("102"), org("103")]);
        let users = indexed(Vec::<User>::new());
        let tickets = indexed(Vec::<Ticket>::new());

        let matches = [orgs.get("103").unwrap(), orgs.get("101").unwrap()];
        let related = related_to_organizations(&matches, &users, &tickets).unwrap();
        let order: Vec<_> = related.iter().map(|m| m.organization.id.as_str()).collect();
        assert_eq!(order, vec!["103", "101"]);
    }
}
