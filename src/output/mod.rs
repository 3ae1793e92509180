pub mod models;
pub mod writer;

pub use models::{
    Achievement, AccountProfile, ContributorStat, DashboardData, LanguageStat, PageRecord,
    RepositoryRecord, Tier, TotalStats,
};
pub use writer::write_dashboard;
