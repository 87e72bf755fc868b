//! The variant catalogue.
//!
//! Every variant is a newtype around a
//! [`DispatchTable`](covenant_dispatch::DispatchTable) over its own state
//! struct. States are plain serde data in the host's JSON shape: camelCase
//! keys, curation fields flattened to the top level.

/// Declare a variant: the newtype, its constructor and its `Contract` impl.
///
/// The body receives the empty table and mounts mixins into it.
macro_rules! variant {
    (
        $(#[$meta:meta])*
        $name:ident($state:ty) = $label:literal;
        |$table:ident| $build:block
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            table: covenant_dispatch::DispatchTable<$state>,
        }

        impl $name {
            /// Compose the variant's dispatch table.
            pub fn new() -> Self {
                let mut $table = covenant_dispatch::DispatchTable::new($label);
                $build;
                Self { table: $table }
            }

            /// The composed dispatch table.
            pub fn table(&self) -> &covenant_dispatch::DispatchTable<$state> {
                &self.table
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl covenant_types::Contract for $name {
            type State = $state;

            fn name(&self) -> &str {
                self.table.name()
            }

            fn operations(&self) -> Vec<&'static str> {
                self.table.operations()
            }

            fn apply(
                &self,
                state: &mut $state,
                action: &covenant_types::Interaction,
            ) -> Result<serde_json::Value, covenant_types::ContractError> {
                self.table.apply(state, action)
            }
        }
    };
}

/// Forward the capability traits to the matching state fields.
macro_rules! state_slices {
    ($state:ty { $($slice:ident),+ $(,)? }) => {
        $(state_slices!(@slice $state, $slice);)+
    };
    (@slice $state:ty, owner) => {
        impl covenant_guard::Owned for $state {
            fn owner(&self) -> &covenant_types::Address {
                &self.owner
            }

            fn set_owner(&mut self, owner: covenant_types::Address) {
                self.owner = owner;
            }
        }
    };
    (@slice $state:ty, roles) => {
        impl covenant_guard::HasRoles for $state {
            fn roles(&self) -> &covenant_guard::RoleRegistry {
                &self.roles
            }

            fn roles_mut(&mut self) -> &mut covenant_guard::RoleRegistry {
                &mut self.roles
            }
        }
    };
    (@slice $state:ty, following) => {
        impl covenant_following::HasFollowing for $state {
            fn following(&self) -> &covenant_following::FollowingList {
                &self.following
            }

            fn following_mut(&mut self) -> &mut covenant_following::FollowingList {
                &mut self.following
            }
        }
    };
    (@slice $state:ty, curation) => {
        impl covenant_curation::HasCuration for $state {
            fn curation(&self) -> &covenant_curation::Curation {
                &self.curation
            }

            fn curation_mut(&mut self) -> &mut covenant_curation::Curation {
                &mut self.curation
            }
        }
    };
}

mod atomic_license;
mod curation;
mod following;
mod hello_world;

pub use atomic_license::{AtomicLicense, AtomicLicenseState};
pub use curation::{
    BaseCuration, BaseCurationState, CollaborativeCuration, CollaborativeCurationState,
    CollaborativeFollowingCuration, CollaborativeFollowingCurationState, FollowingCuration,
    FollowingCurationState, OwnableCuration, OwnableCurationState, OwnerlessFollowingCuration,
    OwnerlessFollowingCurationState,
};
pub use following::{Following, FollowingState};
pub use hello_world::{HelloWorld, HelloWorldPolicy, HelloWorldState};

/// The role collaborative variants grant to co-curators.
pub const CURATOR: &str = "curator";

#[cfg(test)]
fn assert_send_sync<T: Send + Sync>(_: &T) {}
