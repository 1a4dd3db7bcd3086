use assert_cmd::Command;
use std::path::Path;

pub fn run_gitdav_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitdav").expect("Failed to find gitdav binary");
    cmd.env("RUST_LOG", "off");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
