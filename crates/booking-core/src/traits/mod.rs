//! Repository traits (ports)

mod repositories;

pub use repositories::{BookedSlotRepository, DiningPlaceRepository, RepoResult, UserRepository};
