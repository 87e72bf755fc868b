//! The atomic license contract.

use covenant_evolve::{Evolvable, HasEvolve};
use covenant_guard::{OnlyOwner, Ownable};
use covenant_types::Address;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State of [`AtomicLicense`].
///
/// `canEvolve` is read by the host's loader, not by the contract: `evolve`
/// stays owner-gated whatever the flag says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicLicenseState {
    /// The license holder.
    pub owner: Address,
    /// Whether the host honours `evolve` when loading the contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_evolve: Option<bool>,
    /// Source the host should load next, if the owner has evolved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolve: Option<String>,
    /// Genesis keys this variant does not model, carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

state_slices!(AtomicLicenseState { owner });

impl HasEvolve for AtomicLicenseState {
    fn evolve(&self) -> Option<&str> {
        self.evolve.as_deref()
    }

    fn set_evolve(&mut self, code_ref: String) {
        self.evolve = Some(code_ref);
    }
}

variant! {
    /// An evolvable license owned by one address.
    AtomicLicense(AtomicLicenseState) = "atomic-license";
    |table| {
        table
            .mount(&Evolvable, OnlyOwner)
            .mount(&Ownable, OnlyOwner);
    }
}
