use anyhow::Result;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("Created .lingotrc.json"));

    let content = test.read_file(".lingotrc.json")?;
    assert!(content.contains("catalogs"));
    assert!(content.contains("sourceRoot"));
    assert!(content.contains("namespacePrefix"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".lingotrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr);
    assert!(stderr.contains("already exists"));
    assert_eq!(test.read_file(".lingotrc.json")?, "{}");
    Ok(())
}
