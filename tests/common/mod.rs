use assert_cmd::Command;

pub fn reviews_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reviews").unwrap();
    cmd.env_remove("REVIEWS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
