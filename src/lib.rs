pub mod core;
pub mod model;
pub mod schema;
pub mod index;
pub mod search;
pub mod relation;
pub mod storage;
pub mod cli;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                           DESKSEARCH ARCHITECTURE                            │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── STORAGE ─────────────────────────────────────┐
│  DataLayout ── data_dir/{organizations,users,tickets}.json                   │
│  load_collection::<R>() ── JSON array → Collection<R> (file order, by _id)   │
└──────────────────────────────────────────────────────────────────────────────┘
                                     │
                                     ▼
┌──────────────────────────────── MODEL / SCHEMA ──────────────────────────────┐
│  Organization, User, Ticket   impl Record { KIND, schema(), id(), field() }  │
│  RecordSchema { kind, fields: &'static [FieldDefinition] }                   │
└──────────────────────────────────────────────────────────────────────────────┘
                                     │
                                     ▼
┌──────────────────────────────── INDEX ───────────────────────────────────────┐
│  FieldIndex: field → value → PostingList (ordered, de-duplicated ids)        │
│  absent / null / empty values  → "NULL_OR_EMPTY"                             │
│  IndexedCollection<R> = Collection<R> + its FieldIndex                       │
└──────────────────────────────────────────────────────────────────────────────┘
                                     │
                                     ▼
┌──────────────────────────────── SEARCH / RELATION ───────────────────────────┐
│  search(field, value) ── exact match, bucket order                           │
│  Organization → users, tickets       (organizationId)                        │
│  User         → organization, tickets (submitterId, then assigneeId)         │
│  Ticket       → organization, users   (submitterId, assigneeId)              │
└──────────────────────────────────────────────────────────────────────────────┘
                                     │
                                     ▼
┌──────────────────────────────── CORE / CLI ──────────────────────────────────┐
│  Database { organizations, users, tickets, loaded_at }                      │
│  Config (defaults → desksearch.toml → DESKSEARCH_*) → Prompt / render        │
└──────────────────────────────────────────────────────────────────────────────┘
*/
