use uuid::{Builder, Uuid};

/// Supplies `sessionId` values while the catalog is being built.
pub trait UuidSource {
    fn next_uuid(&mut self) -> Uuid;
}

/// Fresh v4 UUIDs; every run of the program sees different sample ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUuids;

impl UuidSource for RandomUuids {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic v4-shaped UUIDs built from a counter: the first one is
/// `00000000-0000-4000-8000-000000000001`.
#[derive(Debug, Clone)]
pub struct SequentialUuids {
    next: u64,
}

impl SequentialUuids {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialUuids {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidSource for SequentialUuids {
    fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0_u8; 16];
        bytes[8..].copy_from_slice(&self.next.to_be_bytes());
        self.next = self.next.wrapping_add(1);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomUuids, SequentialUuids, UuidSource};

    #[test]
    fn sequential_ids_are_reproducible() {
        let mut first = SequentialUuids::new();
        let mut second = SequentialUuids::new();
        let a: Vec<_> = (0..3).map(|_| first.next_uuid()).collect();
        let b: Vec<_> = (0..3).map(|_| second.next_uuid()).collect();
        assert_eq!(a, b);
        assert_eq!(a[0].to_string(), "00000000-0000-4000-8000-000000000001");
        assert_eq!(a[2].to_string(), "00000000-0000-4000-8000-000000000003");
        assert_eq!(a[0].get_version_num(), 4);
    }

    #[test]
    fn random_ids_differ() {
        let mut ids = RandomUuids;
        assert_ne!(ids.next_uuid(), ids.next_uuid());
    }
}
