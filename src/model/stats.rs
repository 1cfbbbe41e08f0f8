use crate::dto::stats::StatsDto;

/// Dashboard counters for the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub new_requests_count: u64,
    pub total_dogs_count: u64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            new_requests_count: self.new_requests_count,
            total_dogs_count: self.total_dogs_count,
        }
    }
}
