use xterm_config::{EnvSource, Resolver};

pub fn cmd_data_dir<E: EnvSource>(resolver: &Resolver<E>) {
  println!("{}", resolver.user_data_path().display());
}
