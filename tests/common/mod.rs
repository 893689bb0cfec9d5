use assert_cmd::Command;

pub fn flatconf_cmd() -> Command {
    Command::cargo_bin("flatconf").unwrap()
}
