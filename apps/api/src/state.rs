use std::sync::Arc;

use tracing::info;

use appointment_cell::{AppointmentLedger, AppointmentState, TransitionPolicy};
use auth_cell::{AuthState, CredentialTable};
use directory_cell::SpecialistDirectory;
use sanction_cell::{SanctionLedger, SanctionState};
use shared_config::AppConfig;
use shared_utils::session::AuthContext;

/// Everything the cells share for the life of the process.
///
/// Accounts and the specialist roster are reference data and always loaded;
/// `seed_demo_data` only controls whether the ledgers start with the demo rows.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: AuthContext,
    pub credentials: Arc<CredentialTable>,
    pub directory: Arc<SpecialistDirectory>,
    pub appointments: Arc<AppointmentLedger>,
    pub sanctions: Arc<SanctionLedger>,
}

impl AppState {
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let policy = TransitionPolicy::from_config(&config);
        info!("Appointment transition policy: {:?}", policy);

        let (appointments, sanctions) = if config.seed_demo_data {
            info!("Seeding ledgers with demo appointments and sanctions");
            (AppointmentLedger::demo(policy), SanctionLedger::demo())
        } else {
            (AppointmentLedger::new(policy), SanctionLedger::new())
        };

        Self {
            auth: AuthContext::new(config.clone()),
            credentials: Arc::new(CredentialTable::demo()),
            directory: Arc::new(SpecialistDirectory::demo()),
            appointments: Arc::new(appointments),
            sanctions: Arc::new(sanctions),
            config,
        }
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState {
            auth: self.auth.clone(),
            credentials: self.credentials.clone(),
        }
    }

    pub fn appointment_state(&self) -> AppointmentState {
        AppointmentState {
            auth: self.auth.clone(),
            ledger: self.appointments.clone(),
            directory: self.directory.clone(),
        }
    }

    pub fn sanction_state(&self) -> SanctionState {
        SanctionState {
            auth: self.auth.clone(),
            ledger: self.sanctions.clone(),
        }
    }
}
