//! Configuration types module

pub mod app;
pub mod logging;
pub mod zabbix;

mod de;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use zabbix::ZabbixConfig;
