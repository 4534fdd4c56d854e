//! # clinipass core
//!
//! The patient-record lookup workflow: session/token lifecycle, the
//! record aggregator that assembles a display-ready record from one
//! primary fetch and three degradable detail fetches, and the observable
//! state containers the screens react to.
//!
//! **No UI concerns**: screens, navigation and theming belong to
//! whatever front end drives these services (the workspace ships a CLI
//! driver in `clinipass-cli`).

pub mod aggregator;
pub mod auth;
pub mod error;
pub mod lookup;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::{PatientRecord, RecordAggregator};
pub use auth::AuthService;
pub use error::LookupError;
pub use lookup::LookupService;
pub use session::SessionStore;
pub use state::{LoginState, LookupState, StateContainer};
