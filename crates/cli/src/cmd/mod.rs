mod data_dir;
mod get;
mod info;
mod show;

pub use data_dir::cmd_data_dir;
pub use get::cmd_get;
pub use info::cmd_info;
pub use show::cmd_show;
