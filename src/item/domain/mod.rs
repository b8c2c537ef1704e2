//! Domain model for item lookup.
//!
//! Items, their properties and skills are read-only projections owned by the
//! catalogue. The domain adds query classification, result normalisation and
//! card composition on top of them. All infrastructure concerns are kept
//! outside the domain boundary.

mod access;
mod card;
mod damage_type;
mod error;
mod ids;
mod item;
mod matches;
mod query;

pub use access::{ChannelWhitelist, CommandInvocation};
pub use card::{CardField, ItemCard};
pub use damage_type::DamageType;
pub use error::ItemDomainError;
pub use ids::{ChannelId, ItemId};
pub use item::{Item, ItemProperty, ItemSkill, RARITY_STAR};
pub use matches::{LookupMatches, MAX_LISTED_MATCHES, MatchEntry, MatchList};
pub use query::ItemQuery;
