// libs/directory-cell/src/services/directory.rs
use tracing::debug;

use crate::models::{DirectoryError, Specialist, SpecialtyFilter};

/// Case-insensitive substring match of `query` against name or specialty,
/// narrowed by `filter` and to available specialists only.
pub fn search(specialists: &[Specialist], query: &str, filter: &SpecialtyFilter) -> Vec<Specialist> {
    let needle = query.to_lowercase();

    specialists
        .iter()
        .filter(|specialist| {
            let matches_query = specialist.name.to_lowercase().contains(&needle)
                || specialist.specialty.to_lowercase().contains(&needle);

            matches_query && filter.matches(&specialist.specialty) && specialist.available
        })
        .cloned()
        .collect()
}

/// Static roster of specialists. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct SpecialistDirectory {
    specialists: Vec<Specialist>,
}

impl SpecialistDirectory {
    pub fn new(specialists: Vec<Specialist>) -> Self {
        Self { specialists }
    }

    pub fn demo() -> Self {
        let entry = |id: &str, name: &str, specialty: &str, photo: &str, available: bool| Specialist {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            photo: format!("https://images.unsplash.com/{}?w=400&h=400&fit=crop", photo),
            available,
        };

        Self::new(vec![
            entry("s1", "Dr. Juan Pérez", "Cardiología", "photo-1612349317150-e413f6a5b16d", true),
            entry("s2", "Dra. Ana Martínez", "Dermatología", "photo-1594824476967-48c8b964273f", true),
            entry("s3", "Dr. Roberto Sánchez", "Neurología", "photo-1622253692010-333f2da6031d", true),
            entry("s4", "Dra. Laura Fernández", "Pediatría", "photo-1559839734-2b71ea197ec2", false),
            entry("s5", "Dr. Miguel Torres", "Traumatología", "photo-1537368910025-700350fe46c7", true),
            entry("s6", "Dra. Carmen Ruiz", "Oftalmología", "photo-1607990281513-2c110a25bd8c", true),
        ])
    }

    pub fn all(&self) -> &[Specialist] {
        &self.specialists
    }

    pub fn find(&self, specialist_id: &str) -> Result<&Specialist, DirectoryError> {
        self.specialists
            .iter()
            .find(|specialist| specialist.id == specialist_id)
            .ok_or_else(|| DirectoryError::SpecialistNotFound(specialist_id.to_string()))
    }

    pub fn search(&self, query: &str, filter: &SpecialtyFilter) -> Vec<Specialist> {
        let results = search(&self.specialists, query, filter);
        debug!(
            "Specialist search '{}' with filter {:?} returned {} results",
            query,
            filter,
            results.len()
        );
        results
    }
}
