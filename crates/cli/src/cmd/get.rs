use anyhow::Result;
use xterm_config::{EnvSource, Resolver};

/// Print a single default in the form the settings layer stores it
pub fn cmd_get<E: EnvSource>(resolver: &Resolver<E>, name: &str) -> Result<()> {
  let value = resolver.get(name)?;
  println!("{}", value);
  Ok(())
}
