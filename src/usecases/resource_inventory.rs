//! Resource inventory aggregate. Allocation never exceeds the total.

use super::ensure_unique_ids;
use crate::domain::{DomainError, Resource};
use tracing::{info, warn};

pub struct ResourceInventory {
    resources: Vec<Resource>,
}

impl ResourceInventory {
    /// Builds the inventory. Every line must satisfy `0 < quantity` and `allocated <= quantity`,
    /// and ids must be unique.
    pub fn new(resources: Vec<Resource>) -> Result<Self, DomainError> {
        for r in &resources {
            r.validate()?;
        }
        ensure_unique_ids("resource", resources.iter().map(|r| r.id.as_str()))?;
        let inventory = Self { resources };
        inventory.report_inconsistencies();
        Ok(inventory)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Resource, DomainError> {
        self.resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("resource {}", id)))
    }

    /// Allocate units from one line. Returns the new allocated count.
    pub fn allocate(&mut self, id: &str, units: u32) -> Result<u32, DomainError> {
        let r = self.get_mut(id)?;
        r.allocate(units)?;
        info!(
            resource_id = id,
            units,
            allocated = r.allocated,
            quantity = r.quantity,
            "resource allocated"
        );
        Ok(r.allocated)
    }

    pub fn release(&mut self, id: &str, units: u32) -> Result<u32, DomainError> {
        let r = self.get_mut(id)?;
        r.release(units);
        info!(resource_id = id, units, allocated = r.allocated, "resource released");
        Ok(r.allocated)
    }

    /// Lines whose stored status contradicts their usage. Status is left as stored.
    pub fn inconsistencies(&self) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.status_disagrees_with_usage())
            .collect()
    }

    fn report_inconsistencies(&self) {
        for r in self.inconsistencies() {
            warn!(
                resource_id = %r.id,
                status = %r.status,
                allocated = r.allocated,
                quantity = r.quantity,
                "resource status disagrees with usage"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResourceStatus, ResourceType};

    fn resource(id: &str, status: ResourceStatus, quantity: u32, allocated: u32) -> Resource {
        Resource {
            id: id.into(),
            name: format!("resource {}", id),
            resource_type: ResourceType::Medical,
            status,
            quantity,
            allocated,
            location: "Central Storage".into(),
            last_updated: "5m ago".into(),
        }
    }

    #[test]
    fn test_rejects_invalid_lines() {
        assert!(ResourceInventory::new(vec![resource("1", ResourceStatus::Low, 0, 0)]).is_err());
        assert!(ResourceInventory::new(vec![resource("1", ResourceStatus::Low, 5, 6)]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ResourceInventory::new(vec![
            resource("r", ResourceStatus::Low, 25, 18),
            resource("r", ResourceStatus::Available, 8, 3),
        ])
        .err()
        .unwrap();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
    }

    #[test]
    fn test_allocate_and_release() {
        let mut inv =
            ResourceInventory::new(vec![resource("1", ResourceStatus::Low, 25, 18)]).unwrap();
        assert_eq!(inv.allocate("1", 7).unwrap(), 25);

        let err = inv.allocate("1", 1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
        assert_eq!(inv.get("1").unwrap().allocated, 25);

        assert_eq!(inv.release("1", 30).unwrap(), 0);
        assert!(inv.allocate("missing", 1).is_err());
    }

    #[test]
    fn test_inconsistencies_are_reported_not_fixed() {
        let inv = ResourceInventory::new(vec![
            resource("1", ResourceStatus::Critical, 100, 95),
            resource("2", ResourceStatus::Critical, 100, 10),
            resource("3", ResourceStatus::Available, 8, 8),
        ])
        .unwrap();
        let ids: Vec<&str> = inv.inconsistencies().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert_eq!(inv.get("2").unwrap().status, ResourceStatus::Critical);
    }
}
