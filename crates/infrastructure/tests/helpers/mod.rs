pub mod mock_daemon;

pub use mock_daemon::MockDaemon;
