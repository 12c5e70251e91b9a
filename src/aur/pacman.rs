use duct::cmd;

use super::config::Config;
use super::error::AurError;
use super::exec;

/// Remove an installed package through pacman, prefixed with the
/// configured privilege escalation command.
pub fn remove(config: &Config, name: &str, debug: bool) -> Result<(), AurError> {
    let mut argv = config.privilege_command.clone();
    argv.extend(["pacman", "-Rns", name, "--noconfirm"].map(String::from));

    if debug {
        eprintln!("Executing: {}", argv.join(" "));
    }

    let Some((program, args)) = argv.split_first() else {
        return Err(AurError::Remove("empty removal command".to_string()));
    };

    exec::run_quiet(cmd(program.as_str(), args), debug).map_err(AurError::Remove)
}
