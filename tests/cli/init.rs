use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(test.root().join(".insomnia-gql.json").exists());

    assert_snapshot!(test.read_file(".insomnia-gql.json")?, @r#"
    {
      "output": "insomnia-import.json",
      "extensions": [
        "jsx",
        "js"
      ],
      "ignores": []
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".insomnia-gql.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".insomnia-gql.json already exists"));
    assert_eq!(test.read_file(".insomnia-gql.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/api.js", "const ping = gql`query Ping { ping }`;\n")?;

    let output = test.export_command().output()?;
    assert!(
        output.status.success(),
        "Export should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
