use xterm_config::{EnvSource, Resolver};

use crate::output::{print_info, print_stat};

pub fn cmd_info<E: EnvSource>(resolver: &Resolver<E>) {
  let ctx = resolver.context();
  print_info(&format!("xterm-defaults v{}", env!("CARGO_PKG_VERSION")));
  print_stat("Platform", ctx.os().as_str());
  print_stat("Home", &ctx.home_dir().display().to_string());
  print_stat("User data", &resolver.user_data_path().display().to_string());
}
