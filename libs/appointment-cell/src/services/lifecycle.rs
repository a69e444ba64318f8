// libs/appointment-cell/src/services/lifecycle.rs
use std::collections::HashMap;

use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::{AppointmentError, AppointmentStatus};

/// Which status changes the ledger accepts.
///
/// The default is unrestricted: any status may follow any other, including
/// reopening a completed or cancelled appointment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Unrestricted,
    /// Completed and cancelled are terminal; postponed may be moved again.
    Guarded,
    Custom(HashMap<AppointmentStatus, Vec<AppointmentStatus>>),
}

impl TransitionPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "unrestricted" => Some(TransitionPolicy::Unrestricted),
            "guarded" => Some(TransitionPolicy::Guarded),
            _ => None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::from_name(&config.appointment_transition_policy).unwrap_or_else(|| {
            warn!(
                "Unknown appointment transition policy '{}', falling back to unrestricted",
                config.appointment_transition_policy
            );
            TransitionPolicy::Unrestricted
        })
    }

    /// Get all valid next statuses for a given current status
    pub fn valid_transitions(&self, current_status: AppointmentStatus) -> Vec<AppointmentStatus> {
        match self {
            TransitionPolicy::Unrestricted => AppointmentStatus::ALL.to_vec(),
            TransitionPolicy::Guarded => match current_status {
                AppointmentStatus::Scheduled => vec![
                    AppointmentStatus::Completed,
                    AppointmentStatus::Cancelled,
                    AppointmentStatus::Postponed,
                ],
                AppointmentStatus::Postponed => vec![
                    AppointmentStatus::Scheduled,
                    AppointmentStatus::Completed,
                    AppointmentStatus::Cancelled,
                    AppointmentStatus::Postponed,
                ],
                AppointmentStatus::Completed | AppointmentStatus::Cancelled => vec![],
            },
            TransitionPolicy::Custom(table) => {
                table.get(&current_status).cloned().unwrap_or_default()
            }
        }
    }

    /// Validate that a status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition from {} to {}", current_status, new_status);

        if !self.valid_transitions(current_status).contains(&new_status) {
            warn!("Invalid status transition attempted: {} -> {}", current_status, new_status);
            return Err(AppointmentError::InvalidStatusTransition {
                from: current_status,
                to: new_status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;

    #[test]
    fn test_unrestricted_allows_everything() {
        let policy = TransitionPolicy::default();
        for from in AppointmentStatus::ALL {
            for to in AppointmentStatus::ALL {
                assert!(policy.validate_status_transition(from, to).is_ok());
            }
        }
    }

    #[test]
    fn test_guarded_terminal_states() {
        let policy = TransitionPolicy::Guarded;

        assert!(policy.validate_status_transition(Scheduled, Cancelled).is_ok());
        assert!(policy.validate_status_transition(Postponed, Postponed).is_ok());
        assert_eq!(
            policy.validate_status_transition(Cancelled, Completed),
            Err(AppointmentError::InvalidStatusTransition { from: Cancelled, to: Completed })
        );
        assert!(policy.valid_transitions(Completed).is_empty());
    }

    #[test]
    fn test_custom_table() {
        let policy = TransitionPolicy::Custom(HashMap::from([(Scheduled, vec![Completed])]));

        assert!(policy.validate_status_transition(Scheduled, Completed).is_ok());
        assert!(policy.validate_status_transition(Scheduled, Cancelled).is_err());
        assert!(policy.validate_status_transition(Completed, Scheduled).is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(TransitionPolicy::from_name("Guarded"), Some(TransitionPolicy::Guarded));
        assert_eq!(TransitionPolicy::from_name("unrestricted"), Some(TransitionPolicy::Unrestricted));
        assert_eq!(TransitionPolicy::from_name("strict"), None);
    }

    #[test]
    fn test_from_config_falls_back() {
        let config = AppConfig {
            appointment_transition_policy: "bogus".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(TransitionPolicy::from_config(&config), TransitionPolicy::Unrestricted);
    }
}
