use anyhow::Result;

use crate::{CATALOG_DE, CliTest, DIALOG_CPP, stdout_of};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file("translations/app_de.ts", CATALOG_DE)?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("no issues found"));
    assert!(stdout.contains("1 source file"));
    assert!(stdout.contains("1 catalog"));
    Ok(())
}

#[test]
fn test_missing_message_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Paste options</source>
        <translation>Einfügeoptionen</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("error: \"Service:\""));
    assert!(stdout.contains("missing"));
    assert!(stdout.contains("translations/app_de.ts"));
    assert!(stdout.contains("src/pastedialog.cpp:4"));
    assert!(stdout.contains("1 error"));
    Ok(())
}

#[test]
fn test_untranslated_is_warning_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Paste options</source>
        <translation>Einfügeoptionen</translation>
    </message>
    <message>
        <source>Service:</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("warning: \"Service:\""));
    assert!(stdout.contains("untranslated"));
    assert!(stdout.contains("context PasteDialog"));
    Ok(())
}

#[test]
fn test_duplicate_source_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Service:</source>
        <translation>Dienst:</translation>
    </message>
    <message>
        <source>Service:</source>
        <translation>Service:</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("duplicate"));
    assert!(stdout.contains("first occurrence at line"));
    Ok(())
}

#[test]
fn test_obsolete_is_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Old text</source>
        <translation type="obsolete">Alter Text</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("warning: \"Old text\""));
    assert!(stdout.contains("obsolete"));
    assert!(stdout.contains("--no-obsolete"));
    Ok(())
}

#[test]
fn test_broken_catalog_reported_not_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    test.write_file("translations/app_de.ts", "<TS version=\"2.0\">\n<context>")?;
    test.write_file("translations/app_fr.ts", CATALOG_DE)?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("translations/app_de.ts"));
    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pastedialog.cpp", DIALOG_CPP)?;
    // Missing everything, and one unfinished entry
    test.write_file(
        "translations/app_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Paste options</source>
        <translation type="unfinished"/>
    </message>
</context>
</TS>
"#,
    )?;

    let output = test.check_command().arg("untranslated").output()?;
    let stdout = stdout_of(&output);

    // Only the selected rule runs: the missing error is not reported
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("untranslated"));
    assert!(!stdout.contains("missing in:"));
    Ok(())
}

#[test]
fn test_config_ignores_respected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lingotrc.json",
        r#"{ "ignores": ["generated/**"] }"#,
    )?;
    test.write_file("generated/gen.cpp", DIALOG_CPP)?;

    let output = test.check_command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains("0 source files"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("update"));
    assert!(stdout.contains("stats"));
    assert!(stdout.contains("init"));
    Ok(())
}
