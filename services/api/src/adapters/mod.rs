pub mod db;
pub mod files;
pub mod session;

pub use db::DbAdapter;
pub use files::LocalBlobStore;
pub use session::DbSessionCheck;
