pub mod dashboard;
pub mod server;

pub use dashboard::DashboardService;
pub use server::ServerService;
