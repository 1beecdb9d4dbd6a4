pub mod category;
pub mod generate;
pub mod init;
pub mod search;
pub mod site;

pub use category::Category;
pub use generate::Generate;
pub use init::Init;
pub use search::Search;
pub use site::Site;
